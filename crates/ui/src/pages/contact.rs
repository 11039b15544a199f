use crate::components::{ButtonLink, ButtonVariant, Card, Glyph, PageHero};
use dioxus::prelude::*;
use folio_domain::contact::{ContactField, ContactPhase, ContactView};
use folio_domain::content::{Icon, SiteContent};
use folio_domain::route::Route;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";

#[component]
pub fn ContactPage(content: &'static SiteContent, view: ContactView) -> Element {
    rsx! {
        PageHero {
            badge: "Contact",
            title: "Let's Work Together",
            lead: "Have a project in mind or want to discuss an opportunity? I'd love to hear from you.",
        }

        section { class: "section-tail",
            div { class: "container grid grid-2",
                div { class: "stack",
                    div {
                        h2 { "Get In Touch" }
                        div { class: "grid grid-2 tight",
                            for method in content.contact_methods.iter() {
                                a {
                                    class: "method",
                                    href: method.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    Card { class: "method-card",
                                        div { class: "icon-tile small", Glyph { icon: method.icon } }
                                        div {
                                            h3 { {method.label} }
                                            p { class: "accent small", {method.value} }
                                            p { class: "muted tiny", {method.description} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    Card {
                        h3 { "Availability" }
                        div { class: "stack tight",
                            for item in content.availability.iter() {
                                div { class: "availability",
                                    Glyph { icon: item.icon }
                                    span { class: "muted small", {item.label} ":" }
                                    span { class: "small", {item.value} }
                                }
                            }
                        }
                    }
                }

                Card { class: "contact-card",
                    {
                        match &view.phase {
                            ContactPhase::Submitted { receipt } => rsx! {
                                Confirmation { receipt_id: receipt.id.clone() }
                            },
                            _ => rsx! { ContactFormCard { view: view.clone() } },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Confirmation(receipt_id: String) -> Element {
    rsx! {
        div { class: "confirmation", "data-receipt": "{receipt_id}",
            div { class: "icon-tile round", Glyph { icon: Icon::CheckCircle } }
            h3 { "Message Sent!" }
            p { class: "muted",
                "Thanks for reaching out. I'll get back to you as soon as possible."
            }
            ButtonLink { href: Route::Contact.path(), variant: ButtonVariant::Outline, "Send Another Message" }
        }
        div { class: "toast", role: "status",
            strong { "Message sent!" }
            p { "Thanks for reaching out. I'll get back to you soon." }
        }
    }
}

/// The form as the server sends it. The busy state exists only in the browser: `site.js`
/// disables the button and swaps in `data-busy-label` while the post is in flight.
#[component]
fn ContactFormCard(view: ContactView) -> Element {
    rsx! {
        h2 { "Send a Message" }
        form {
            class: "contact-form",
            method: "post",
            action: Route::Contact.path(),
            "data-busy-form": "true",
            div { class: "grid grid-2 tight",
                Field { field: ContactField::Name, placeholder: "Your name", view: view.clone() }
                Field { field: ContactField::Email, placeholder: "your@email.com", view: view.clone() }
            }
            Field { field: ContactField::Subject, placeholder: "What's this about?", view: view.clone() }
            Field {
                field: ContactField::Message,
                placeholder: "Tell me about your project or opportunity...",
                view: view.clone(),
            }
            button {
                class: "button button-accent button-block",
                r#type: "submit",
                "data-busy-label": BUSY_LABEL,
                {SUBMIT_LABEL}
            }
        }
    }
}

/// Labelled control with its validation message.
#[component]
fn Field(field: ContactField, placeholder: &'static str, view: ContactView) -> Element {
    let name = field.key();
    let value = field.value(&view.draft).to_owned();
    let error = view.error_for(field);
    let error_id = format!("{name}-error");
    let invalid = if error.is_some() { "true" } else { "false" };

    let control = match field {
        ContactField::Message => rsx! {
            textarea {
                id: name,
                name,
                placeholder,
                rows: "5",
                required: true,
                "aria-invalid": invalid,
                "aria-describedby": error_id.clone(),
                "{value}"
            }
        },
        ContactField::Email => rsx! {
            input { id: name, name, r#type: "email", placeholder, value, required: true,
                "aria-invalid": invalid, "aria-describedby": error_id.clone() }
        },
        ContactField::Name | ContactField::Subject => rsx! {
            input { id: name, name, r#type: "text", placeholder, value, required: true,
                "aria-invalid": invalid, "aria-describedby": error_id.clone() }
        },
    };

    rsx! {
        div { class: "field",
            label { r#for: name, {field.label()} }
            {control}
            if let Some(message) = error {
                p { class: "field-error", id: error_id, {message} }
            }
        }
    }
}
