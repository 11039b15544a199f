use folio_catalog::{Catalog, init};

#[test]
fn init_creates_slice() {
    let slice = init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Catalog>());

    let catalog = slice.state.as_any().downcast_ref::<Catalog>().expect("catalog slice");
    assert_eq!(catalog.content.projects.len(), 8);
}
