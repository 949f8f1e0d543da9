//! Static reference data: categories, districts and seed providers.
//!
//! Built once on first access and never mutated afterwards.

use once_cell::sync::Lazy;

use crate::category::{Category, Glyph};
use crate::provider::{ServiceProvider, SocialLinks};

/// Reserved filter value meaning "no restriction".
pub const ALL_SENTINEL: &str = "all";

pub static REFERENCE: Lazy<ReferenceData> = Lazy::new(ReferenceData::seeded);

#[derive(Debug, Clone)]
pub struct ReferenceData {
    categories: Vec<Category>,
    districts: Vec<String>,
    providers: Vec<ServiceProvider>,
}

impl ReferenceData {
    pub fn new(categories: Vec<Category>, districts: Vec<String>, providers: Vec<ServiceProvider>) -> Self {
        Self { categories, districts, providers }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    pub fn providers(&self) -> &[ServiceProvider] {
        &self.providers
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Glyph for a category id; unknown ids get the default glyph.
    pub fn category_glyph(&self, id: &str) -> Glyph {
        self.category(id).map(Category::glyph).unwrap_or_default()
    }

    pub fn is_district(&self, name: &str) -> bool {
        self.districts.iter().any(|d| d == name)
    }

    pub fn provider(&self, id: &str) -> Option<&ServiceProvider> {
        self.providers.iter().find(|p| p.id == id)
    }

    fn seeded() -> Self {
        Self::new(seed_categories(), seed_districts(), seed_providers())
    }
}

fn seed_categories() -> Vec<Category> {
    vec![
        Category::new("plumbing", "Plumbing", "wrench"),
        Category::new("electrical", "Electrical", "zap"),
        Category::new("it-services", "IT Services", "laptop"),
        Category::new("design", "Graphic Design", "palette"),
        Category::new("cleaning", "Cleaning", "sparkles"),
        Category::new("tutoring", "Tutoring", "book-open"),
        Category::new("legal", "Legal Services", "scale"),
        Category::new("healthcare", "Healthcare", "stethoscope"),
        Category::new("tailoring", "Tailoring", "shirt"),
        Category::new("consulting", "Business Consulting", "briefcase"),
    ]
}

fn seed_districts() -> Vec<String> {
    [
        "Ampara", "Anuradhapura", "Badulla", "Batticaloa", "Colombo", "Galle", "Gampaha",
        "Hambantota", "Jaffna", "Kalutara", "Kandy", "Kegalle", "Kilinochchi", "Kurunegala",
        "Mannar", "Matale", "Matara", "Monaragala", "Mullaitivu", "Nuwara Eliya", "Polonnaruwa",
        "Puttalam", "Ratnapura", "Trincomalee", "Vavuniya",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

struct Seed<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    category: &'a str,
    location: &'a str,
    skills: &'a [&'a str],
    rating: Option<f32>,
    featured: bool,
    phone: &'a str,
    email: Option<&'a str>,
    whatsapp: Option<&'a str>,
    facebook: Option<&'a str>,
    linkedin: Option<&'a str>,
    created_at: &'a str,
}

impl Seed<'_> {
    fn build(&self) -> ServiceProvider {
        let links = SocialLinks {
            facebook: self.facebook.map(String::from),
            instagram: None,
            linkedin: self.linkedin.map(String::from),
        };
        ServiceProvider {
            id: self.id.into(),
            name: self.name.into(),
            description: self.description.into(),
            category: self.category.into(),
            location: self.location.into(),
            skills: self.skills.iter().map(|s| s.to_string()).collect(),
            rating: self.rating,
            featured: self.featured,
            phone: self.phone.into(),
            email: self.email.map(String::from),
            whatsapp: self.whatsapp.map(String::from),
            social_links: (!links.is_empty()).then_some(links),
            created_at: self.created_at.into(),
        }
    }
}

fn seed_providers() -> Vec<ServiceProvider> {
    [
        Seed {
            id: "1",
            name: "Perera Plumbing Services",
            description: "Reliable residential and commercial plumbing with over 15 years of experience. Emergency call-outs available across the Colombo area.",
            category: "plumbing",
            location: "Colombo",
            skills: &["Pipe Repair", "Bathroom Installation", "Water Heater Service", "Leak Detection"],
            rating: Some(4.8),
            featured: true,
            phone: "+94 77 123 4567",
            email: Some("info@pereraplumbing.lk"),
            whatsapp: Some("+94 77 123 4567"),
            facebook: Some("https://facebook.com/pereraplumbing"),
            linkedin: None,
            created_at: "2024-01-15T09:00:00Z",
        },
        Seed {
            id: "2",
            name: "Bright Spark Electricals",
            description: "Certified electricians for wiring, rewiring, solar panel installation and safety inspections.",
            category: "electrical",
            location: "Kandy",
            skills: &["House Wiring", "Solar Installation", "Safety Inspection"],
            rating: Some(4.6),
            featured: true,
            phone: "+94 71 234 5678",
            email: Some("hello@brightspark.lk"),
            whatsapp: Some("+94 71 234 5678"),
            facebook: None,
            linkedin: None,
            created_at: "2024-03-02T11:30:00Z",
        },
        Seed {
            id: "3",
            name: "CodeCraft IT Solutions",
            description: "Web development, computer repair and network setup for homes and small businesses.",
            category: "it-services",
            location: "Colombo",
            skills: &["Web Development", "Computer Repair", "Network Setup", "Data Recovery", "Cloud Migration"],
            rating: Some(4.9),
            featured: true,
            phone: "+94 76 345 6789",
            email: Some("contact@codecraft.lk"),
            whatsapp: None,
            facebook: None,
            linkedin: Some("https://linkedin.com/company/codecraft-lk"),
            created_at: "2024-02-10T08:45:00Z",
        },
        Seed {
            id: "4",
            name: "Lanka Creative Studio",
            description: "Logo design, branding and social media graphics for businesses of every size.",
            category: "design",
            location: "Galle",
            skills: &["Logo Design", "Branding", "Social Media Graphics"],
            rating: Some(4.7),
            featured: true,
            phone: "+94 77 456 7890",
            email: Some("studio@lankacreative.lk"),
            whatsapp: Some("+94 77 456 7890"),
            facebook: Some("https://facebook.com/lankacreative"),
            linkedin: None,
            created_at: "2024-04-18T14:20:00Z",
        },
        Seed {
            id: "5",
            name: "Sparkle Home Cleaning",
            description: "Professional deep cleaning, move-in/move-out cleaning and regular housekeeping.",
            category: "cleaning",
            location: "Gampaha",
            skills: &["Deep Cleaning", "Carpet Cleaning", "Office Cleaning"],
            rating: Some(4.5),
            featured: true,
            phone: "+94 75 567 8901",
            email: None,
            whatsapp: Some("+94 75 567 8901"),
            facebook: None,
            linkedin: None,
            created_at: "2024-05-06T07:10:00Z",
        },
        Seed {
            id: "6",
            name: "Math Masters Tutoring",
            description: "O/L and A/L mathematics and physics tuition, individual and group classes.",
            category: "tutoring",
            location: "Kandy",
            skills: &["Mathematics", "Physics", "Exam Preparation"],
            rating: Some(4.9),
            featured: false,
            phone: "+94 71 678 9012",
            email: Some("classes@mathmasters.lk"),
            whatsapp: None,
            facebook: None,
            linkedin: None,
            created_at: "2023-11-20T16:00:00Z",
        },
        Seed {
            id: "7",
            name: "Fernando & Associates",
            description: "Legal consultation for property transfers, contracts and family matters.",
            category: "legal",
            location: "Colombo",
            skills: &["Property Law", "Contract Drafting", "Family Law"],
            rating: Some(4.4),
            featured: false,
            phone: "+94 11 278 9012",
            email: Some("office@fernandolaw.lk"),
            whatsapp: None,
            facebook: None,
            linkedin: Some("https://linkedin.com/company/fernando-associates"),
            created_at: "2023-09-12T10:00:00Z",
        },
        Seed {
            id: "8",
            name: "CareWell Home Nursing",
            description: "Qualified nurses for elderly care, post-operative care and home visits.",
            category: "healthcare",
            location: "Kurunegala",
            skills: &["Elderly Care", "Wound Dressing", "Home Visits"],
            rating: Some(4.8),
            featured: false,
            phone: "+94 77 890 1234",
            email: None,
            whatsapp: Some("+94 77 890 1234"),
            facebook: None,
            linkedin: None,
            created_at: "2024-06-01T06:30:00Z",
        },
        Seed {
            id: "9",
            name: "Silk Thread Tailors",
            description: "Custom tailoring, saree blouse stitching and alterations with quick turnaround.",
            category: "tailoring",
            location: "Matara",
            skills: &["Custom Tailoring", "Alterations", "Saree Blouses", "School Uniforms"],
            rating: None,
            featured: false,
            phone: "+94 70 901 2345",
            email: None,
            whatsapp: None,
            facebook: Some("https://facebook.com/silkthreadtailors"),
            linkedin: None,
            created_at: "2024-07-22T12:00:00Z",
        },
        Seed {
            id: "10",
            name: "GrowRight Business Advisory",
            description: "Business plans, bookkeeping setup and tax guidance for startups and SMEs.",
            category: "consulting",
            location: "Colombo",
            skills: &["Business Planning", "Bookkeeping", "Tax Advice"],
            rating: Some(4.3),
            featured: false,
            phone: "+94 11 234 5678",
            email: Some("advice@growright.lk"),
            whatsapp: None,
            facebook: None,
            linkedin: Some("https://linkedin.com/company/growright"),
            created_at: "2024-08-05T09:15:00Z",
        },
        Seed {
            id: "11",
            name: "Jaffna Quick Fix Plumbing",
            description: "Affordable plumbing repairs, tank cleaning and pump installation in the Northern Province.",
            category: "plumbing",
            location: "Jaffna",
            skills: &["Pipe Repair", "Water Pump Installation", "Tank Cleaning"],
            rating: Some(4.2),
            featured: false,
            phone: "+94 77 012 3456",
            email: None,
            whatsapp: Some("+94 77 012 3456"),
            facebook: None,
            linkedin: None,
            created_at: "2024-09-14T15:45:00Z",
        },
        Seed {
            id: "12",
            name: "PixelPerfect Web Design",
            description: "Responsive websites, e-commerce stores and UI design for local brands.",
            category: "design",
            location: "Colombo",
            skills: &["Web Design", "UI/UX", "E-commerce"],
            rating: Some(4.6),
            featured: false,
            phone: "+94 76 123 9876",
            email: Some("team@pixelperfect.lk"),
            whatsapp: None,
            facebook: None,
            linkedin: None,
            created_at: "2024-10-01T10:00:00Z",
        },
    ]
    .iter()
    .map(Seed::build)
    .collect()
}
