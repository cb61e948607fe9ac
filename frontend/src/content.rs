//! Marketing copy and outbound links, kept as data in `content/site.json`.

use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub links: Links,
    pub hero: Hero,
    pub pillars: Pillars,
    pub schedule: Schedule,
    pub deliverables: Deliverables,
    pub about: About,
    pub testimonials: Testimonials,
    pub faq: Faq,
    pub pricing: Pricing,
    pub footer: Footer,
    pub legal: Legal,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Brand {
    pub name_lead: String,
    pub name_accent: String,
    pub logo: String,
    pub tagline: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Links {
    pub booking: String,
    pub email: String,
    #[serde(default)]
    pub email_subject: Option<String>,
    pub instagram: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub badge: String,
    pub headline_lead: String,
    pub headline_accent: String,
    pub headline_tail: String,
    pub subheadline_lead: String,
    pub advisor: String,
    pub subheadline_tail: String,
    pub intro: String,
    pub cta: String,
    pub video: String,
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Pillars {
    pub title_lead: String,
    pub title_accent: String,
    pub items: Vec<Pillar>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Pillar {
    pub letter: String,
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Schedule {
    pub title: String,
    pub subtitle: String,
    pub blocks: Vec<ScheduleBlock>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleBlock {
    pub time: String,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Deliverables {
    pub title: String,
    pub items: Vec<Deliverable>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Deliverable {
    pub title: String,
    pub desc: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct About {
    pub title: String,
    pub greeting: String,
    pub name: String,
    pub photo: String,
    pub photo_alt: String,
    pub paragraphs: Vec<String>,
    pub credentials: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonials {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Testimonial>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Faq {
    pub title: String,
    pub items: Vec<FaqEntry>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub q: String,
    pub a: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Pricing {
    pub title_lead: String,
    pub title_accent: String,
    pub price: String,
    pub price_note: String,
    pub includes: Vec<String>,
    pub cta: String,
    pub disclaimer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Footer {
    pub disclaimer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Legal {
    pub terms: Terms,
    pub privacy: Privacy,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Terms {
    pub title: String,
    pub intro: String,
    pub clauses: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Privacy {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub contact_lead: String,
}

impl SiteContent {
    /// The copy compiled into the bundle.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let sections = [
            ("pillars", self.pillars.items.is_empty()),
            ("schedule", self.schedule.blocks.is_empty()),
            ("deliverables", self.deliverables.items.is_empty()),
            ("testimonials", self.testimonials.items.is_empty()),
            ("faq", self.faq.items.is_empty()),
        ];
        match sections.iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(ContentError::EmptySection(*name)),
            None => Ok(()),
        }
    }

    pub fn brand_name(&self) -> String {
        format!("{}{}", self.brand.name_lead, self.brand.name_accent)
    }
}

impl Links {
    /// Booking link opening the provider's calendar on the month of `today`.
    pub fn booking_url(&self, today: NaiveDate) -> String {
        let separator = if self.booking.contains('?') { '&' } else { '?' };
        format!("{}{}month={}", self.booking, separator, today.format("%Y-%m"))
    }

    pub fn current_booking_url(&self) -> String {
        self.booking_url(Local::now().date_naive())
    }

    pub fn mailto(&self) -> String {
        match &self.email_subject {
            Some(subject) => format!("mailto:{}?subject={}", self.email, urlencoding::encode(subject)),
            None => format!("mailto:{}", self.email),
        }
    }
}

pub fn copyright_line(brand_name: &str, year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, brand_name)
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = SiteContent::embedded().expect("embedded content should parse");

        assert_eq!(content.brand_name(), "KiwiKrypto");
        assert_eq!(content.hero.stats.len(), 3);
        assert_eq!(content.pillars.items.len(), 3);
        assert_eq!(content.schedule.blocks.len(), 3);
        assert!(content.schedule.blocks.iter().all(|b| b.items.len() == 4));
        assert_eq!(content.deliverables.items.len(), 6);
        assert_eq!(content.testimonials.items.len(), 3);
        assert_eq!(content.faq.items.len(), 5);
        assert_eq!(content.pricing.includes.len(), 4);
        assert_eq!(content.legal.terms.clauses.len(), 5);
        assert_eq!(content.legal.privacy.paragraphs.len(), 4);
    }

    #[test]
    fn test_booking_url_carries_month() {
        let content = SiteContent::embedded().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();

        assert_eq!(
            content.links.booking_url(date),
            "https://calendly.com/kiwikrypto33-s0tu/60-minute-consultation?month=2025-12"
        );
    }

    #[test]
    fn test_booking_url_keeps_existing_query() {
        let links = Links {
            booking: "https://example.com/book?ref=site".to_string(),
            email: "a@b.c".to_string(),
            email_subject: None,
            instagram: String::new(),
        };
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();

        assert_eq!(links.booking_url(date), "https://example.com/book?ref=site&month=2026-01");
        assert_eq!(links.mailto(), "mailto:a@b.c");
    }

    #[test]
    fn test_mailto_encodes_subject() {
        let content = SiteContent::embedded().unwrap();

        assert_eq!(
            content.links.mailto(),
            "mailto:kiwikrypto33@gmail.com?subject=Crypto%20consultation%20enquiry"
        );
    }

    #[test]
    fn test_empty_section_is_rejected() {
        let mut raw: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        raw["faq"]["items"] = serde_json::json!([]);

        let err = SiteContent::from_json(&raw.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptySection("faq")));
    }

    #[test]
    fn test_malformed_content_is_a_parse_error() {
        let err = SiteContent::from_json("{\"brand\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line("KiwiKrypto", 2025), "© 2025 KiwiKrypto. All rights reserved.");
    }
}
