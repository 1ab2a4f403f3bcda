//! Site profiles and the starter elements generated from them.

use crate::document::Snapshot;
use crate::element::{Element, ElementId, ElementType, Styles};
use crate::factory::Theme;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Page template the canvas is styled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Default,
    Business,
    Portfolio,
    Blog,
    Ecommerce,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Default,
        TemplateKind::Business,
        TemplateKind::Portfolio,
        TemplateKind::Blog,
        TemplateKind::Ecommerce,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemplateKind::Default => "default",
            TemplateKind::Business => "business",
            TemplateKind::Portfolio => "portfolio",
            TemplateKind::Blog => "blog",
            TemplateKind::Ecommerce => "ecommerce",
        }
    }

    /// Human readable name for template pickers.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Default => "Default Template",
            TemplateKind::Business => "Business Template",
            TemplateKind::Portfolio => "Portfolio Template",
            TemplateKind::Blog => "Blog Template",
            TemplateKind::Ecommerce => "E-Commerce Template",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// Optional site features picked in the onboarding form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    pub gallery: bool,
    pub contact_form: bool,
    pub testimonials: bool,
    pub blog: bool,
    pub ecommerce: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

/// Business details collected before the editor opens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteProfile {
    pub business_name: String,
    pub business_type: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    /// Uploaded logo; any non-null value counts as present.
    pub logo: Option<serde_json::Value>,
    pub description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub social_links: SocialLinks,
    pub features: Features,
}

impl SiteProfile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn theme(&self) -> Theme {
        Theme {
            primary_color: self.primary_color.clone(),
        }
    }

    /// Template matching the business type, if it names one.
    pub fn template(&self) -> TemplateKind {
        TemplateKind::parse(&self.business_type).unwrap_or_default()
    }

    pub fn has_logo(&self) -> bool {
        self.logo.as_ref().is_some_and(|logo| !logo.is_null())
    }

    pub fn has_contact_info(&self) -> bool {
        !self.contact_email.is_empty() || !self.contact_phone.is_empty() || !self.address.is_empty()
    }

    pub fn sells_online(&self) -> bool {
        self.business_type == "ecommerce" || self.features.ecommerce
    }

    /// The "Contact Us" block text.
    fn contact_block(&self) -> String {
        let mut content = String::from("Contact Us:\n");
        if !self.contact_email.is_empty() {
            content.push_str(&format!("Email: {}\n", self.contact_email));
        }
        if !self.contact_phone.is_empty() {
            content.push_str(&format!("Phone: {}\n", self.contact_phone));
        }
        if !self.address.is_empty() {
            content.push_str(&format!("Address: {}", self.address));
        }
        content
    }
}

fn seeded(element_type: ElementType, x: f64, y: f64, content: impl Into<String>, styles: Styles) -> Element {
    Element::with_id(ElementId::generate(), element_type, Point::new(x, y), content.into(), styles)
}

/// Starter elements for a new site, in paint order.
pub fn seed_elements(profile: &SiteProfile) -> Vec<Element> {
    let theme = profile.theme();
    let primary = theme.primary();
    let mut elements = Vec::new();

    elements.push(seeded(
        ElementType::Heading,
        20.0,
        20.0,
        profile.business_name.clone(),
        Styles::new()
            .with("width", "80%")
            .with("fontSize", "32px")
            .with("fontWeight", "bold")
            .with("color", primary)
            .with("backgroundColor", "transparent")
            .with("padding", "10px"),
    ));

    if !profile.description.is_empty() {
        elements.push(seeded(
            ElementType::Text,
            20.0,
            100.0,
            profile.description.clone(),
            Styles::new()
                .with("width", "80%")
                .with("fontSize", "16px")
                .with("color", "#333")
                .with("backgroundColor", "transparent")
                .with("padding", "10px"),
        ));
    }

    if profile.has_contact_info() {
        elements.push(seeded(
            ElementType::Text,
            20.0,
            200.0,
            profile.contact_block(),
            Styles::new()
                .with("width", "40%")
                .with("fontSize", "14px")
                .with("color", "#555")
                .with("backgroundColor", "#f9f9f9")
                .with("padding", "15px")
                .with("borderRadius", "4px"),
        ));
    }

    if profile.sells_online() {
        elements.push(seeded(
            ElementType::Button,
            20.0,
            300.0,
            "Shop Now",
            Styles::new()
                .with("width", "auto")
                .with("padding", "12px 24px")
                .with("color", "#fff")
                .with("backgroundColor", primary)
                .with("borderRadius", "4px")
                .with("fontWeight", "bold")
                .with("cursor", "pointer"),
        ));
    }

    let image_label = if profile.has_logo() { "Logo Image" } else { "Featured Image" };
    elements.push(seeded(
        ElementType::Image,
        400.0,
        100.0,
        image_label,
        Styles::new()
            .with("width", "300px")
            .with("height", "200px")
            .with("backgroundColor", "#f0f0f0")
            .with("border", format!("1px solid {}", primary)),
    ));

    elements
}

/// Starter snapshot for a new site.
pub fn seed_snapshot(profile: &SiteProfile) -> Snapshot {
    seed_elements(profile)
        .into_iter()
        .fold(Snapshot::new(), |doc, element| doc.insert_element(element))
}
