//! Static restaurant information shown in the footer, contact and home pages.
//!
//! None of this lives in the backend; it ships with the binary.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpeningHours {
    pub days: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

/// A headline number on the home page, e.g. "15+ Tahun Pengalaman".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub address_lines: &'static [&'static str],
    pub phone: &'static str,
    /// `tel:` form of `phone`.
    pub phone_href: &'static str,
    pub email: &'static str,
    pub opening_hours: &'static [OpeningHours],
    pub highlights: &'static [Highlight],
    pub instagram_url: &'static str,
    pub facebook_url: &'static str,
}

pub const SITE_INFO: SiteInfo = SiteInfo {
    name: "Meteen",
    tagline: "Meteen menyajikan hidangan berkualitas dengan cita rasa lokal modern yang menggugah selera.",
    about: &[
        "Meteen adalah restoran yang menghadirkan pengalaman kuliner modern dengan sentuhan tradisional Indonesia. Kami berkomitmen untuk menyajikan hidangan berkualitas tinggi menggunakan bahan-bahan segar dan pilihan.",
        "Dengan tim chef berpengalaman dan suasana yang nyaman, kami siap memberikan pengalaman bersantap yang tak terlupakan untuk Anda dan keluarga.",
    ],
    address_lines: &[
        "Jalan Raya Meteen No.12",
        "Jakarta Selatan, Indonesia 12345",
    ],
    phone: "+62 812-3456-7890",
    phone_href: "tel:+6281234567890",
    email: "hello@meteen.com",
    opening_hours: &[
        OpeningHours {
            days: "Senin - Jumat",
            open: "08:00",
            close: "22:00",
        },
        OpeningHours {
            days: "Sabtu - Minggu",
            open: "08:00",
            close: "23:00",
        },
    ],
    highlights: &[
        Highlight {
            value: "15+",
            label: "Tahun Pengalaman",
        },
        Highlight {
            value: "50+",
            label: "Menu Pilihan",
        },
    ],
    instagram_url: "https://instagram.com",
    facebook_url: "https://facebook.com",
};
