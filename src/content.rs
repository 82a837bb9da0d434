//! Fixed page copy.

/// One card in the services grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

/// A client quote and its attribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
}

/// A navigation entry pointing at a section id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

/// Section ids that must each appear exactly once on the page.
pub const SECTION_IDS: [&str; 5] = ["services", "values", "areas", "reviews", "contact"];

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { section: "services", label: "Services" },
    NavLink { section: "values", label: "Why choose us" },
    NavLink { section: "areas", label: "Areas we cover" },
    NavLink { section: "reviews", label: "Reviews" },
    NavLink { section: "contact", label: "Contact" },
];

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Personal Care",
        text: "Respectful help with bathing, dressing, grooming and more — always with dignity.",
        icon: "🫧",
    },
    Service {
        title: "Companionship",
        text: "Friendly faces for conversation, hobbies, walks and community activities.",
        icon: "☕",
    },
    Service {
        title: "Dementia Support",
        text: "Specialist, structured support that keeps people engaged and safe at home.",
        icon: "🧠",
    },
    Service {
        title: "Medication Support",
        text: "Prompts and administration as part of a clear, recorded care plan.",
        icon: "💊",
    },
    Service {
        title: "Hospital to Home",
        text: "Smooth discharge support with practical help and short‑term care packages.",
        icon: "🏥",
    },
    Service {
        title: "Live‑in Care",
        text: "Round‑the‑clock assistance for maximum reassurance for you and your family.",
        icon: "🏡",
    },
];

pub const VALUES: [&str; 5] = [
    "Person‑centred care built with you",
    "Longer visit times so nothing feels rushed",
    "Punctual, well‑trained Care Professionals",
    "Responsive local office team in Swindon",
    "Regular reviews and transparent care notes",
];

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        quote: "Carers were always on time and treated Mum with real kindness. Communication with the office was excellent.",
        name: "Daughter of client",
    },
    Testimonial {
        quote: "Professional, reliable and flexible. They built a plan around Dad’s routines and hobbies.",
        name: "Son of client",
    },
];

pub const EXPECTATIONS: [&str; 4] = [
    "Clear pricing and no surprise fees",
    "Care notes you can access and review",
    "Continuity of carers wherever possible",
    "Regular check‑ins from our office team",
];

pub const FEATURED_QUOTE: Testimonial = Testimonial {
    quote: "Everyone at S‑Rock Care is utterly devoted to person‑centred care. If you want a friendly face to help with everyday tasks, personal care or simply a chat, we have the perfect person waiting for you.",
    name: "Local Registered Manager",
};

pub const AREAS_COVERED: &str = "Swindon and nearby villages — Old Town, Wroughton, Blunsdon, Highworth, Wanborough, Royal Wootton Bassett, Purton and more.";

pub const FOOTER_LINKS: [&str; 4] = ["Privacy", "Cookies", "CQC profile", "NHS listing"];

/// City-level map embed for the coverage panel.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d19519.99699337439!2d-1.824!3d51.556!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x4871443b1b6a1a2f%3A0x2a!2sSwindon!5e0!3m2!1sen!2suk!4v1680000000000";

/// Origin the map frame is loaded from; allowed by the page's `frame-src`.
pub const MAP_ORIGIN: &str = "https://www.google.com";

/// Id of the contact form.
pub const ENQUIRY_FORM_ID: &str = "enquiry";
