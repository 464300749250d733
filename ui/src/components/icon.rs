use leptos::prelude::*;

use crate::content::Glyph;

/// 24x24 stroke outlines.
fn outline(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        Glyph::Award => &[
            "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12",
            "M15.48 12.89 17 22l-5-3-5 3 1.52-9.11",
        ],
        Glyph::Battery => &[
            "M6 7h10a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
            "M22 11v2",
        ],
        Glyph::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
        Glyph::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "M12 6v6l4 2"],
        Glyph::Droplets => &[
            "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 \
             1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z",
            "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 \
             1-11.91 4.97",
        ],
        Glyph::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
        Glyph::Heart => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2\
             -4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        ],
        Glyph::Instagram => &[
            "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ],
        Glyph::Linkedin => &[
            "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
            "M2 9h4v12H2z",
            "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4",
        ],
        Glyph::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "m22 7-10 7L2 7",
        ],
        Glyph::MapPin => &[
            "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
            "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
        ],
        Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        Glyph::Phone => &[
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 \
             19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 \
             2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 \
             12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        ],
        Glyph::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
        Glyph::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        Glyph::Sparkles => &[
            "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 \
             0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
            "M5 3v4",
            "M3 5h4",
            "M19 17v4",
            "M17 19h4",
        ],
        Glyph::Target => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
            "M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12",
            "M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4",
        ],
        Glyph::Twitter => &[
            "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 \
             2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
        ],
        Glyph::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        Glyph::X => &["M18 6 6 18", "m6 6 12 12"],
        Glyph::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
    }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {outline(glyph).iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
