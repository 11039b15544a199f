#[test]
fn folio_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/folio_error_pass.rs");
    t.pass("tests/ui/folio_error_cfg_variant.rs");
}
