//! Landing page.

use dioxus::prelude::*;
use ui::Navbar;

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}
        div {
            class: "home-hero",
            h1 { "Barmodule" }
            p { "Platform belajar kecantikan: tatarias, salon, treatment dan hairstyle." }
            div {
                class: "home-actions",
                a { class: "hero-button", href: "/belajar-tatarias", "Mulai Belajar" }
                a { class: "hero-button secondary", href: "/about", "Tentang Kami" }
            }
        }

        div {
            class: "home-categories",
            h2 { "Materi" }
            div {
                class: "category-grid",
                a { class: "category-card", href: "/belajar-tatarias",
                    h3 { "Tatarias" }
                    p { "Makeup, facial dan skincare" }
                }
                a { class: "category-card", href: "/belajar-salon",
                    h3 { "Salon" }
                    p { "Hair care, nail art, spa dan massage" }
                }
                a { class: "category-card", href: "/belajar-treatment",
                    h3 { "Treatment" }
                    p { "Perawatan badan, wajah dan rambut" }
                }
                a { class: "category-card", href: "/belajar-hairstyle",
                    h3 { "Hairstyle" }
                    p { "Haircut, coloring dan styling" }
                }
            }
        }
    }
}
