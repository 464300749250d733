//! Copy and catalogue data shown on the pages.

/// Glyphs the pages draw. Rendered as inline SVG by the `Icon` component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ArrowRight,
    Award,
    Battery,
    CheckCircle,
    Clock,
    Droplets,
    Facebook,
    Heart,
    Instagram,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Phone,
    Send,
    Shield,
    Sparkles,
    Target,
    Twitter,
    Users,
    X,
    Zap,
}

pub struct Product {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub features: &'static [&'static str],
    pub backdrop: &'static str,
    pub upcoming: bool,
}

impl Product {
    /// Cards show at most this many feature chips.
    pub const MAX_CHIPS: usize = 4;

    pub fn chips(&self) -> impl Iterator<Item = (&'static str, Glyph)> {
        self.features
            .iter()
            .take(Self::MAX_CHIPS)
            .map(|f| (*f, feature_glyph(f)))
    }
}

fn feature_glyph(feature: &str) -> Glyph {
    match feature {
        "Large 300ml Tank" => Glyph::Droplets,
        "USB Rechargeable" => Glyph::Battery,
        "Compact Design" | "Smart Sensors" => Glyph::Clock,
        _ => Glyph::Zap,
    }
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Orpick Flosser",
        tagline: "Professional-Grade Cleaning",
        description: "Our flagship water flosser delivers powerful yet gentle cleaning for your \
                      entire family. With 3 pressure modes and a large reservoir, enjoy thorough \
                      cleaning without frequent refills.",
        image: Some("/assets/img/normal-flosser.png"),
        features: &[
            "3 Pressure Modes",
            "Large 300ml Tank",
            "USB Rechargeable",
            "360° Rotation",
        ],
        backdrop: "bg-gradient-to-br from-slate-100 to-slate-200",
        upcoming: false,
    },
    Product {
        name: "Orpick Travel Kit",
        tagline: "Oral Care On-The-Go",
        description: "Compact, portable, and powerful. The Travel Kit comes with multiple nozzle \
                      attachments and a convenient carrying case, perfect for maintaining your \
                      routine anywhere.",
        image: Some("/assets/img/travel-kit.png"),
        features: &[
            "5 Nozzle Tips",
            "Compact Design",
            "Travel Case Included",
            "IPX7 Waterproof",
        ],
        backdrop: "bg-gradient-to-br from-sky-100 to-cyan-100",
        upcoming: false,
    },
    Product {
        name: "Electric Brushes",
        tagline: "Coming Soon",
        description: "Experience the next generation of electric toothbrushes. Advanced sonic \
                      technology with smart pressure sensors and personalized brushing modes.",
        image: None,
        features: &[
            "Sonic Technology",
            "Smart Sensors",
            "Long Battery Life",
            "Multiple Heads",
        ],
        backdrop: "bg-muted",
        upcoming: true,
    },
];

/// Icon, title and body. Used by the feature grid and the values grid.
pub struct Highlight {
    pub glyph: Glyph,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: &[Highlight] = &[
    Highlight {
        glyph: Glyph::Droplets,
        title: "Advanced Water Technology",
        body: "Pulsating water streams effectively remove plaque and debris from between teeth \
               and below the gumline.",
    },
    Highlight {
        glyph: Glyph::Battery,
        title: "Long-Lasting Battery",
        body: "Up to 30 days of use on a single charge. Never worry about running out of power \
               during your routine.",
    },
    Highlight {
        glyph: Glyph::Shield,
        title: "IPX7 Waterproof",
        body: "Fully waterproof design allows for safe use in the shower. Easy to clean and \
               maintain.",
    },
    Highlight {
        glyph: Glyph::Award,
        title: "Clinically Proven",
        body: "Tested and approved by dental professionals. Proven to be 50% more effective than \
               string flossing.",
    },
    Highlight {
        glyph: Glyph::Zap,
        title: "Multiple Modes",
        body: "Choose from gentle, normal, or pulse modes to customize your cleaning experience.",
    },
    Highlight {
        glyph: Glyph::Heart,
        title: "Gentle on Gums",
        body: "Designed with sensitive gums in mind. Our flossers provide thorough cleaning \
               without irritation.",
    },
];

pub const VALUES: &[Highlight] = &[
    Highlight {
        glyph: Glyph::Award,
        title: "Excellence",
        body: "We are committed to delivering products of the highest quality, backed by \
               extensive research and development.",
    },
    Highlight {
        glyph: Glyph::Users,
        title: "Customer First",
        body: "Every decision we make starts with the question: How will this benefit our \
               customers?",
    },
    Highlight {
        glyph: Glyph::Target,
        title: "Innovation",
        body: "We continuously push the boundaries of oral care technology to bring you the best \
               solutions.",
    },
    Highlight {
        glyph: Glyph::Heart,
        title: "Care",
        body: "We genuinely care about your oral health and work tirelessly to help you achieve \
               a healthier smile.",
    },
];

/// (value, label)
pub const STATS: &[(&str, &str)] = &[("99%", "Customer Satisfaction"), ("24/7", "Customer Support")];

/// (year, event)
pub const MILESTONES: &[(&str, &str)] = &[
    ("2018", "OCare founded with a mission to revolutionize oral care"),
    ("2019", "Launched our first water flosser to great acclaim"),
    ("2020", "Expanded to 5 countries across Asia"),
    ("2022", "Introduced the compact Travel Kit series"),
    ("2024", "Reached 50,000+ satisfied customers worldwide"),
    ("2026", "Launching revolutionary Electric Brushes"),
];

pub const STORY: &[&str] = &[
    "OCare was born from a simple observation: quality oral care products were either too \
     expensive or too complicated for everyday use. Our founders, a team of dental \
     professionals and engineers, set out to change that.",
    "Starting in a small office in Bangalore, we spent two years researching and developing our \
     first water flosser. We consulted with dentists, tested countless prototypes, and listened \
     to real users to create a product that truly works.",
    "Today, OCare products are trusted by over 50,000 customers across 15 countries. But we're \
     just getting started. Our commitment to innovation, quality, and customer satisfaction \
     drives everything we do.",
];

pub const MISSION: &str = "To make professional-grade oral care accessible, affordable, and \
                           enjoyable for everyone. We believe that a healthy smile is the \
                           foundation of confidence and well-being.";

pub const MISSION_POINTS: &[&str] = &[
    "Affordable Quality",
    "Innovation First",
    "Customer Focused",
    "Sustainable Practices",
];

pub struct ContactDetail {
    pub glyph: Glyph,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        glyph: Glyph::MapPin,
        title: "Visit Us",
        lines: &[
            "Shailby Tower FF-1",
            "Sri sai Krishna Residency",
            "Uttarahalli, Chikkalasandra",
            "Bangalore 560061",
        ],
    },
    ContactDetail {
        glyph: Glyph::Phone,
        title: "Call Us",
        lines: &["+91-6367661851"],
    },
    ContactDetail {
        glyph: Glyph::Mail,
        title: "Email Us",
        lines: &["info@ocare.in"],
    },
    ContactDetail {
        glyph: Glyph::Clock,
        title: "Business Hours",
        lines: &[
            "Monday - Friday: 9:00 AM - 6:00 PM",
            "Saturday: 10:00 AM - 4:00 PM",
        ],
    },
];

pub const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3888.9076621893127!2d77.54!3d12.9!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMTLCsDU0JzAwLjAiTiA3N8KwMzInMjQuMCJF!5e0!3m2!1sen!2sin!4v1234567890";

pub const ADDRESS: &str =
    "Shailby Tower FF-1 Sri sai Krishna Residency Uttarahalli, Chikkalasandra, Bangalore 560061";
pub const FOOTER_PHONE: &str = "+91 98765 43210";
pub const FOOTER_EMAIL: &str = "hello@ocare.in";

pub struct FooterGroup {
    pub title: &'static str,
    /// (label, href); "#" marks pages that do not exist yet
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        title: "Company",
        links: &[("About Us", "/about"), ("Contact", "/contact"), ("Careers", "#")],
    },
    FooterGroup {
        title: "Products",
        links: &[
            ("Water Flossers", "/#products"),
            ("Travel Kits", "/#products"),
            ("Electric Brushes", "/#products"),
        ],
    },
    FooterGroup {
        title: "Support",
        links: &[("FAQs", "#"), ("Warranty", "#"), ("Shipping", "#")],
    },
];

pub const SOCIALS: &[(Glyph, &str)] = &[
    (Glyph::Facebook, "Facebook"),
    (Glyph::Twitter, "Twitter"),
    (Glyph::Instagram, "Instagram"),
    (Glyph::Linkedin, "LinkedIn"),
];

pub const COPYRIGHT_YEAR: u16 = 2026;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{LinkTarget, Location};

    #[test]
    fn only_released_products_have_images() {
        for p in PRODUCTS {
            assert_eq!(p.image.is_none(), p.upcoming, "{}", p.name);
        }
    }

    #[test]
    fn chips_are_capped_and_mapped() {
        let flosser: Vec<_> = PRODUCTS[0].chips().collect();
        assert_eq!(flosser.len(), Product::MAX_CHIPS);
        assert_eq!(flosser[1], ("Large 300ml Tank", Glyph::Droplets));
        assert_eq!(flosser[3].1, Glyph::Zap);
    }

    #[test]
    fn footer_product_links_land_on_the_products_section() {
        let products = FOOTER_GROUPS
            .iter()
            .find(|g| g.title == "Products")
            .unwrap();
        for (_, href) in products.links {
            let at = Location::from_href(href);
            assert!(at.is_home());
            assert_eq!(at.anchor.as_deref(), Some("products"));
        }
    }

    #[test]
    fn footer_routes_are_known_pages() {
        for (_, href) in FOOTER_GROUPS.iter().flat_map(|g| g.links) {
            if *href == "#" || href.starts_with("/#") {
                continue;
            }
            assert!(matches!(LinkTarget::parse(*href), LinkTarget::Route(_)));
            assert!(["/about", "/contact"].contains(href), "{href}");
        }
    }
}
