// Static copy for the landing page.
// The interactive components only read counts and order from here.

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub struct CoreValue {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

/// Anchor ids of the revealable sections, in page order.
pub mod ids {
    pub const FEATURES: &str = "features";
    pub const TECHNOLOGY: &str = "technology";
    pub const PARTNERS: &str = "partners";
    pub const CUSTOMERS: &str = "customers";
    pub const DEMO: &str = "demo";
    pub const ABOUT: &str = "about";
    pub const APP: &str = "app";
    pub const TEAM: &str = "team";
    pub const CONTACT: &str = "contact";

    pub const ALL: &[&str] = &[
        FEATURES, TECHNOLOGY, PARTNERS, CUSTOMERS, DEMO, ABOUT, APP, TEAM, CONTACT,
    ];
}

pub const BRAND: &str = "PATTEX";
pub const LOGO: &str = "assets/pattexl.JPG";

pub const HEADLINE: &str = "Your AI-Powered Pattern Express";
pub const TAGLINE: &str = "Empowering fashion manufacturing with real-time AI pattern recognition and smart cutting automation.";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", target: ids::FEATURES },
    NavLink { label: "Technology", target: ids::TECHNOLOGY },
    NavLink { label: "Partners", target: ids::PARTNERS },
    NavLink { label: "Customers", target: ids::CUSTOMERS },
    NavLink { label: "Demo", target: ids::DEMO },
    NavLink { label: "About", target: ids::ABOUT },
    NavLink { label: "App", target: ids::APP },
    NavLink { label: "Team", target: ids::TEAM },
    NavLink { label: "Contact", target: ids::CONTACT },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Real-Time Pattern Detection",
        description: "Uses YOLOv11 to identify fabric patterns instantly and accurately.",
    },
    Feature {
        title: "AI Layout Optimization",
        description: "Reduces fabric waste by optimizing layout based on material size and design.",
    },
    Feature {
        title: "Precision Cutting Guidance",
        description: "Offers real-time guidance to workers or machines for exact cutting.",
    },
];

pub const TECH_STACK: &[&str] = &[
    "YOLOv11 Fabric Detection",
    "AR & AI-Driven Layout Optimization",
    "Realtime Camera Stream Analysis",
    "Web App Interface with React",
    "Firebase/Node Backend",
];

pub const PARTNERS: &[&str] = &[
    "assets/textiletech.JPG",
    "assets/sustainwear.JPG",
    "assets/fashionailabs.JPG",
    "assets/cutsmart.JPG",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "PATTEX cut our fabric waste by 30% in the first month alone. Game changer!",
        author: "Clara V., Factory Manager",
    },
    Testimonial {
        quote: "We no longer rely on expert cutters. The AI does it all, fast and flawlessly.",
        author: "Miguel S., Apparel Startup Founder",
    },
    Testimonial {
        quote: "Sustainable, scalable, and super smart – that’s how I’d describe PATTEX.",
        author: "Joy D., Sustainable Fashion Designer",
    },
];

pub const DEMO_IMAGE: &str = "assets/sample-webapp.JPG";

pub const MISSION: &str = "To make pattern recognition and fabric cutting accessible to every garment maker, \
     so less material ends up on the cutting-room floor.";

pub const VISION: &str = "A fashion industry where every cut is planned, every roll is used well, \
     and skilled work is supported by tools that see patterns as clearly as people do.";

pub const CORE_VALUES: &[CoreValue] = &[
    CoreValue {
        name: "Sustainability",
        description: "Every feature is measured by the fabric it saves.",
    },
    CoreValue {
        name: "Precision",
        description: "Detection and guidance accurate enough to trust on the factory floor.",
    },
    CoreValue {
        name: "Accessibility",
        description: "Works for small workshops as well as large factories.",
    },
    CoreValue {
        name: "Innovation",
        description: "Applying current computer vision to a centuries-old craft.",
    },
];

pub const APP_IMAGES: &[&str] = &["assets/t1.JPG", "assets/t2.JPG", "assets/t3.JPG"];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alona Grace G.",
        role: "Researcher & Co-founder",
        image: "assets/T111.jpg",
    },
    TeamMember {
        name: "Lourlly Tabura S.",
        role: "Graphics & Co-founder",
        image: "assets/T222.jpg",
    },
    TeamMember {
        name: "Lavinia de los S.",
        role: "Co-founder & UI/UX Designer",
        image: "assets/T333.jpg",
    },
];

pub const CONTACT: Contact = Contact {
    email: "pattexsc@gmail.com",
    phone: "09287394281",
    address: "Kwadra TBI New Site Lapaz, Iloilo City, Philippines",
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/profile.php?id=100093508801497",
        icon: "assets/facebook.webp",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/pattexsc/profilecard/?igsh=ZGJwczNsMHhlNmVk",
        icon: "assets/INSTA.svg",
    },
    SocialLink {
        label: "TikTok",
        url: "https://www.tiktok.com/@pattexsc",
        icon: "assets/TIKTOK.svg",
    },
];
