//! Static page content: merchandise catalog, walkthrough steps, and links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render these values unchanged; nothing here is mutated at
//! runtime.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::carousel::{ImageHandle, Slide, SlideCollection};

pub const APP_URL: &str = "https://explorador-vocacional.vercel.app/";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/pro.pro.videojuego/";
pub const TIKTOK_URL: &str = "https://www.tiktok.com/@pro.pro.videojuego";
pub const CONTACT_EMAIL: &str = "pro.pro.unlp@gmail.com";

pub const HERO_BACKGROUND: &str = "/assets/mapa.png";
pub const MERCH_PLACEHOLDER: &str = "/assets/tienda/placeholder.png";

/// Anchor links shown in the header navigation.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Servicios", "#how-it-works"),
    ("Proyectos", "#tienda"),
    ("Contacto", "#contact"),
];

/// Audience blurbs for the "who is it for" section.
pub const AUDIENCE: &[(&str, &str)] = &[
    ("🧑\u{200d}🎓", "Estudiantes que todavía no tienen claro qué estudiar."),
    ("🎮", "Espacios de orientación que buscan propuestas interactivas."),
    ("🏫", "Escuelas, facultades y equipos que trabajan proyectos de vida."),
];

/// Which side of a walkthrough row the video sits on (desktop layout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaSide {
    Left,
    Right,
}

/// One row of the "how it works" walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub body: &'static str,
    pub video_src: &'static str,
    pub media_side: MediaSide,
}

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Registrate e iniciá tu aventura",
        body: "Creá tu cuenta y comenzá el recorrido diseñado para guiarte paso a paso en tu exploración vocacional.",
        video_src: "/assets/videos/registro.mp4",
        media_side: MediaSide::Left,
    },
    Step {
        number: 2,
        title: "Descubrí tus posibilidades",
        body: "Explorá tus intereses con actividades y desafíos creados para ayudarte a entender tu perfil y tus gustos.",
        video_src: "/assets/videos/comenzar.mp4",
        media_side: MediaSide::Right,
    },
    Step {
        number: 3,
        title: "Explorá el tutorial interactivo",
        body: "Recorré cada sección de la app con un tutorial guiado que te muestra cómo avanzar, jugar y registrar tus descubrimientos.",
        video_src: "/assets/videos/tutorial.mp4",
        media_side: MediaSide::Left,
    },
    Step {
        number: 4,
        title: "Consultá el glosario cuando lo necesites",
        body: "Accedé a definiciones claras y ejemplos sobre conceptos vocacionales para entender mejor cada decisión que vayas tomando.",
        video_src: "/assets/videos/glosario.mp4",
        media_side: MediaSide::Right,
    },
];

fn merch(title: &str, tag: &str, description: &str, src: &str) -> Slide {
    Slide {
        title: title.to_owned(),
        tag: tag.to_owned(),
        description: description.to_owned(),
        image: ImageHandle {
            src: src.to_owned(),
            alt: title.to_owned(),
            fallback_src: Some(MERCH_PLACEHOLDER.to_owned()),
        },
    }
}

/// The store catalog shown by the carousel.
pub fn merch_slides() -> SlideCollection {
    SlideCollection::with_first(
        merch(
            "Tote bag PRO&PRO",
            "Nuevo",
            "Tote PRO&PRO para llevar todos tus productos pro&pro.",
            "/assets/tienda/tienda-1.png",
        ),
        [
            merch(
                "Agenda PRO&PRO",
                "Edición limitada",
                "Tu agenda PRO&PRO para llevar tus ideas siempre contigo.",
                "/assets/tienda/tienda-2.png",
            ),
            merch(
                "Poster J. V. Gonzalez",
                "Para instituciones",
                "Inspirate con el poster de Joaquín V. González",
                "/assets/tienda/tienda-3.png",
            ),
            merch("Remera PRO&PRO", "Nuevo", "Remera canchera de PRO&PRO", "/assets/tienda/tienda-5.png"),
            merch(
                "Botella PRO&PRO",
                "Nuevo",
                "Es importante mantenerse hidratado.",
                "/assets/tienda/tienda-4.png",
            ),
        ],
    )
}

#[must_use]
pub fn mailto_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
