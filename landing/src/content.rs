//! Static page content. Rendered as-is; nothing here is mutated.

/// Header / rail navigation entry. `id` is the DOM anchor of the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", id: "hero" },
    NavItem { label: "Services", id: "services" },
    NavItem { label: "Technologies", id: "tech-stack" },
    NavItem { label: "Specialized", id: "specialized-services" },
    NavItem { label: "Portfolio", id: "portfolio" },
    NavItem { label: "Testimonials", id: "testimonials" },
    NavItem { label: "Contact", id: "contact" },
];

/// Section ids in nav order.
pub fn nav_ids() -> Vec<&'static str> {
    NAV_ITEMS.iter().map(|item| item.id).collect()
}

pub const CONTACT_SECTION: &str = "contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "500+", label: "Projects Completed" },
    Stat { value: "200+", label: "Happy Clients" },
    Stat { value: "10+", label: "Years Experience" },
    Stat { value: "50+", label: "Team Members" },
];

/// Card accent, mapped to a CSS modifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
    Indigo,
    Pink,
    Cyan,
    Red,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
            Accent::Purple => "accent-purple",
            Accent::Orange => "accent-orange",
            Accent::Teal => "accent-teal",
            Accent::Indigo => "accent-indigo",
            Accent::Pink => "accent-pink",
            Accent::Cyan => "accent-cyan",
            Accent::Red => "accent-red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "</>",
        title: "Software Solutions",
        description: "Custom software development tailored to your business needs with modern technologies.",
        accent: Accent::Blue,
    },
    Service {
        icon: "[~]",
        title: "SaaS Development",
        description: "Scalable Software-as-a-Service platforms with robust architecture and security.",
        accent: Accent::Green,
    },
    Service {
        icon: "[*]",
        title: "Design Services",
        description: "Logo design, UI/UX development, and comprehensive brand identity solutions.",
        accent: Accent::Purple,
    },
    Service {
        icon: "[#]",
        title: "CRM Customizations",
        description: "Tailored CRM solutions to streamline your customer relationship management.",
        accent: Accent::Orange,
    },
    Service {
        icon: "[=]",
        title: "DevOps & Infrastructure",
        description: "Cloud infrastructure, CI/CD pipelines, and automated deployment solutions.",
        accent: Accent::Teal,
    },
    Service {
        icon: "[+]",
        title: "Full-stack Development",
        description: "End-to-end web application development with modern frameworks and databases.",
        accent: Accent::Indigo,
    },
    Service {
        icon: "[o]",
        title: "Mobile Development",
        description: "Native and cross-platform mobile applications for iOS and Android platforms.",
        accent: Accent::Pink,
    },
    Service {
        icon: "[%]",
        title: "Custom Software",
        description: "Bespoke software solutions designed specifically for your unique requirements.",
        accent: Accent::Cyan,
    },
    Service {
        icon: "[!]",
        title: "Security Services",
        description: "Comprehensive security audits, penetration testing, and secure development practices.",
        accent: Accent::Red,
    },
];

pub const SPECIALIZED_SERVICES: &[Service] = &[
    Service {
        icon: "</>",
        title: "Custom Web Application Development",
        description: "Build tailored web applications using modern stacks like Node.js, Python, and Vue.js to streamline processes and elevate user experience.",
        accent: Accent::Blue,
    },
    Service {
        icon: "[!]",
        title: "Secure API Development",
        description: "Design and implement secure, scalable REST and GraphQL APIs for seamless integration between services and applications.",
        accent: Accent::Indigo,
    },
    Service {
        icon: "[^]",
        title: "Business Intelligence Dashboards",
        description: "Create dynamic BI dashboards using tools like Metabase, Superset, and Frappe Charts for data-driven decision making.",
        accent: Accent::Purple,
    },
    Service {
        icon: "[~]",
        title: "Cloud Deployment & DevOps",
        description: "Automate deployments using Docker, GitHub Actions, and CI/CD pipelines with hosting on AWS, DigitalOcean, or Render.",
        accent: Accent::Cyan,
    },
    Service {
        icon: "[o]",
        title: "Progressive Web Apps (PWA)",
        description: "Develop fast, reliable, and installable web apps with offline access and push notifications using modern PWA standards.",
        accent: Accent::Pink,
    },
    Service {
        icon: "[>]",
        title: "Automation & Workflow Engineering",
        description: "Design automated business workflows using tools like Zapier, Frappe Workflows, and custom Python scripts.",
        accent: Accent::Orange,
    },
    Service {
        icon: "[@]",
        title: "Role-Based Access Control (RBAC)",
        description: "Implement secure RBAC systems for web and ERP applications with fine-grained permission management.",
        accent: Accent::Teal,
    },
    Service {
        icon: "[%]",
        title: "Real-Time Systems & WebSockets",
        description: "Enable real-time communication and event-driven architectures using Socket.IO and Frappe Realtime APIs.",
        accent: Accent::Red,
    },
    Service {
        icon: "[#]",
        title: "Salesforce Integration",
        description: "Complete Salesforce implementation, customization, and integration services to optimize your customer relationship management and sales processes.",
        accent: Accent::Blue,
    },
    Service {
        icon: "[=]",
        title: "Odoo Implementation",
        description: "Full-scale Odoo ERP implementation and customization for streamlined business operations, inventory management, and financial tracking.",
        accent: Accent::Purple,
    },
    Service {
        icon: "[+]",
        title: "Frappe Custom Solutions",
        description: "ERPNext and custom Frappe framework development for comprehensive business management solutions tailored to your industry needs.",
        accent: Accent::Green,
    },
    Service {
        icon: "[*]",
        title: "HTML Email Design",
        description: "Professional email template design and development with responsive layouts, cross-client compatibility, and high conversion rates.",
        accent: Accent::Orange,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub logo: &'static str,
}

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "C#", logo: "csharp/csharp-original.svg" },
    Technology { name: "C++", logo: "cplusplus/cplusplus-original.svg" },
    Technology { name: "Python", logo: "python/python-original.svg" },
    Technology { name: "Java", logo: "java/java-original.svg" },
    Technology { name: "PHP", logo: "php/php-original.svg" },
    Technology { name: "JavaScript", logo: "javascript/javascript-original.svg" },
    Technology { name: "TypeScript", logo: "typescript/typescript-original.svg" },
    Technology { name: "React", logo: "react/react-original.svg" },
    Technology { name: "Node.js", logo: "nodejs/nodejs-original.svg" },
    Technology { name: "Docker", logo: "docker/docker-original.svg" },
];

impl Technology {
    pub fn logo_url(&self) -> String {
        format!("{DEVICON}/{}", self.logo)
    }
}

/// Marquee track: the list twice, so the scroll animation can loop without a seam.
pub fn marquee_track(items: &[Technology]) -> Vec<Technology> {
    items.iter().chain(items).copied().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Saas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with payment integration, inventory management, and admin dashboard.",
        image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: ProjectCategory::Web,
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 2,
        title: "Healthcare Management System",
        description: "Comprehensive healthcare platform for patient management, appointments, and medical records.",
        image: "https://images.pexels.com/photos/4386466/pexels-photo-4386466.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: ProjectCategory::Saas,
        technologies: &["Vue.js", "Python", "PostgreSQL", "Docker"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 3,
        title: "Mobile Banking App",
        description: "Secure mobile banking application with biometric authentication and real-time transactions.",
        image: "https://images.pexels.com/photos/4386370/pexels-photo-4386370.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: ProjectCategory::Mobile,
        technologies: &["React Native", "Firebase", "Node.js"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 4,
        title: "CRM Dashboard",
        description: "Advanced customer relationship management system with analytics and automation features.",
        image: "https://images.pexels.com/photos/590020/pexels-photo-590020.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: ProjectCategory::Web,
        technologies: &["Angular", "C#", "SQL Server", "Azure"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 5,
        title: "AI-Powered Analytics",
        description: "Machine learning platform for business intelligence and predictive analytics.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: ProjectCategory::Saas,
        technologies: &["Python", "TensorFlow", "React", "AWS"],
        live_url: "#",
        source_url: "#",
    },
    Project {
        id: 6,
        title: "Food Delivery App",
        description: "Complete food delivery ecosystem with customer, restaurant, and delivery partner apps.",
        image: "https://images.pexels.com/photos/4393021/pexels-photo-4393021.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        category: ProjectCategory::Mobile,
        technologies: &["Flutter", "Firebase", "Google Maps API"],
        live_url: "#",
        source_url: "#",
    },
];

/// Portfolio filter button state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PortfolioFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl PortfolioFilter {
    pub const ALL: [PortfolioFilter; 4] = [
        PortfolioFilter::All,
        PortfolioFilter::Category(ProjectCategory::Web),
        PortfolioFilter::Category(ProjectCategory::Mobile),
        PortfolioFilter::Category(ProjectCategory::Saas),
    ];

    pub fn label(self) -> &'static str {
        match self {
            PortfolioFilter::All => "All Projects",
            PortfolioFilter::Category(ProjectCategory::Web) => "Web Apps",
            PortfolioFilter::Category(ProjectCategory::Mobile) => "Mobile Apps",
            PortfolioFilter::Category(ProjectCategory::Saas) => "SaaS Platforms",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Category(category) => project.category == category,
        }
    }
}

/// Projects shown under `filter`, in their original order.
pub fn filter_projects(filter: PortfolioFilter, projects: &[Project]) -> Vec<Project> {
    projects.iter().filter(|p| filter.matches(p)).copied().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    /// 1..=5 stars
    pub rating: u8,
    pub quote: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        position: "CEO",
        company: "TechStartup Inc",
        avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        rating: 5,
        quote: "Xperts Global transformed our entire business process with their custom software solution. The team was professional, responsive, and delivered beyond our expectations. Our productivity increased by 40% within the first month.",
    },
    Testimonial {
        name: "Michael Chen",
        position: "CTO",
        company: "DataFlow Systems",
        avatar: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        rating: 5,
        quote: "The Salesforce integration project was handled with exceptional expertise. Xperts Global not only delivered on time but also provided comprehensive training and ongoing support. Highly recommended for any enterprise-level implementation.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        position: "Operations Director",
        company: "Global Logistics Ltd",
        avatar: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        rating: 5,
        quote: "Working with Xperts Global on our Odoo ERP implementation was a game-changer. They understood our complex requirements and delivered a solution that streamlined our entire supply chain management.",
    },
    Testimonial {
        name: "David Thompson",
        position: "Founder",
        company: "Creative Studios",
        avatar: "https://images.pexels.com/photos/2379005/pexels-photo-2379005.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
        rating: 5,
        quote: "The mobile app they developed for us exceeded all expectations. Clean design, smooth functionality, and excellent performance across all devices. Our user engagement increased by 65% after launch.",
    },
];

impl Testimonial {
    /// Star glyphs for the rating, capped at five.
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub info: &'static str,
    pub accent: Accent,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: "@", title: "Email Us", info: "hello@devagency.com", accent: Accent::Blue },
    ContactChannel { icon: "#", title: "Call Us", info: "+1 (555) 123-4567", accent: Accent::Green },
    ContactChannel {
        icon: "^",
        title: "Visit Us",
        info: "123 Tech Street, Silicon Valley, CA",
        accent: Accent::Purple,
    },
    ContactChannel { icon: "~", title: "Business Hours", info: "Mon-Fri: 9AM-6PM PST", accent: Accent::Orange },
];

pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "About Us", id: "hero" },
    NavItem { label: "Services", id: "services" },
    NavItem { label: "Technologies", id: "tech-stack" },
    NavItem { label: "Portfolio", id: "portfolio" },
    NavItem { label: "Testimonials", id: "testimonials" },
    NavItem { label: "Contact", id: "contact" },
];

pub const FOOTER_SERVICES: &[&str] = &[
    "Software Development",
    "SaaS Solutions",
    "Mobile Apps",
    "UI/UX Design",
    "DevOps",
    "Consulting",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "#" },
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink { label: "GitHub", href: "#" },
];

pub const OPERATIONS_EMAIL: &str = "operations@xperts-global.com";
pub const OPERATIONS_PHONE: &str = "+1 (813) 652-5614";
