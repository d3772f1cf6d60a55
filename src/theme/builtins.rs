//! The built-in theme table: the 58 themes a host page can name in the
//! `theme` attribute. Pure data; converted to owned [`Theme`]s on lookup.

use serde::Serialize;

use super::{Branding, ColorValue, Theme, ThemeColors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeCategory {
    ModernTech,
    Business,
    Nature,
    Creative,
    Premium,
    Lifestyle,
    Specialty,
    Novelty,
    Color,
    Custom,
}

impl ThemeCategory {
    pub const ALL: [ThemeCategory; 10] = [
        ThemeCategory::ModernTech,
        ThemeCategory::Business,
        ThemeCategory::Nature,
        ThemeCategory::Creative,
        ThemeCategory::Premium,
        ThemeCategory::Lifestyle,
        ThemeCategory::Specialty,
        ThemeCategory::Novelty,
        ThemeCategory::Color,
        ThemeCategory::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeCategory::ModernTech => "modern-tech",
            ThemeCategory::Business => "business",
            ThemeCategory::Nature => "nature",
            ThemeCategory::Creative => "creative",
            ThemeCategory::Premium => "premium",
            ThemeCategory::Lifestyle => "lifestyle",
            ThemeCategory::Specialty => "specialty",
            ThemeCategory::Novelty => "novelty",
            ThemeCategory::Color => "color",
            ThemeCategory::Custom => "custom",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ThemeCategory::ModernTech => "Modern & Tech",
            ThemeCategory::Business => "Business & Corporate",
            ThemeCategory::Nature => "Nature & Seasonal",
            ThemeCategory::Creative => "Creative & Artistic",
            ThemeCategory::Premium => "Premium & Luxury",
            ThemeCategory::Lifestyle => "Entertainment & Lifestyle",
            ThemeCategory::Specialty => "Specialty & Industry",
            ThemeCategory::Novelty => "Unique & Fun",
            ThemeCategory::Color => "Color-based",
            ThemeCategory::Custom => "Custom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PaletteDefinition {
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub background: &'static str,
    pub received: &'static str,
    pub sent: &'static str,
    pub accent: &'static str,
    pub surface: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BrandingDefinition {
    pub company_name: &'static str,
    pub support_title: &'static str,
    pub support_subtitle: &'static str,
    pub placeholder: &'static str,
    pub footer_text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub key: &'static str,
    pub category: ThemeCategory,
    pub colors: PaletteDefinition,
    pub branding: BrandingDefinition,
    pub width: u32,
    pub height: u32,
}

impl ThemeDefinition {
    /// Deep copy into an owned theme that callers may freely modify.
    pub fn to_theme(&self) -> Theme {
        let c = &self.colors;
        let b = &self.branding;
        Theme {
            name: self.key.to_string(),
            colors: ThemeColors {
                primary: ColorValue::new(c.primary),
                primary_hover: ColorValue::new(c.primary_hover),
                secondary: ColorValue::new(c.secondary),
                text: ColorValue::new(c.text),
                text_secondary: ColorValue::new(c.text_secondary),
                border: ColorValue::new(c.border),
                background: ColorValue::new(c.background),
                received: ColorValue::new(c.received),
                sent: ColorValue::new(c.sent),
                accent: ColorValue::new(c.accent),
                surface: ColorValue::new(c.surface),
            },
            branding: Branding {
                company_name: b.company_name.to_string(),
                support_title: b.support_title.to_string(),
                support_subtitle: b.support_subtitle.to_string(),
                placeholder: b.placeholder.to_string(),
                footer_text: b.footer_text.to_string(),
            },
            width: self.width,
            height: self.height,
        }
    }
}

pub const BUILTIN_THEMES: &[ThemeDefinition] = &[
    ThemeDefinition {
        key: "modern-dark",
        category: ThemeCategory::ModernTech,
        colors: PaletteDefinition {
            primary: "#6366f1",
            primary_hover: "#4f46e5",
            secondary: "#1f2937",
            text: "#f9fafb",
            text_secondary: "#9ca3af",
            border: "#374151",
            background: "#111827",
            received: "#374151",
            sent: "#6366f1",
            accent: "#10b981",
            surface: "#1f2937",
        },
        branding: BrandingDefinition {
            company_name: "Your Company",
            support_title: "Customer Support",
            support_subtitle: "We're here to help",
            placeholder: "Type your message...",
            footer_text: "We typically reply in a few minutes",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "glassmorphism",
        category: ThemeCategory::ModernTech,
        colors: PaletteDefinition {
            primary: "#3b82f6",
            primary_hover: "#2563eb",
            secondary: "rgba(255, 255, 255, 0.1)",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "rgba(255, 255, 255, 0.2)",
            background: "rgba(255, 255, 255, 0.95)",
            received: "rgba(255, 255, 255, 0.8)",
            sent: "#3b82f6",
            accent: "#8b5cf6",
            surface: "rgba(255, 255, 255, 0.9)",
        },
        branding: BrandingDefinition {
            company_name: "Your Company",
            support_title: "Customer Support",
            support_subtitle: "We're here to help",
            placeholder: "Type your message...",
            footer_text: "We typically reply in a few minutes",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "neon-cyber",
        category: ThemeCategory::ModernTech,
        colors: PaletteDefinition {
            primary: "#00ffff",
            primary_hover: "#00e6e6",
            secondary: "#0a0a0a",
            text: "#ffffff",
            text_secondary: "#a3a3a3",
            border: "#00ffff",
            background: "#111111",
            received: "#1a1a1a",
            sent: "#00ffff",
            accent: "#ff00ff",
            surface: "#0f0f0f",
        },
        branding: BrandingDefinition {
            company_name: "CyberTech",
            support_title: "Tech Support",
            support_subtitle: "Future is now",
            placeholder: "Enter your query...",
            footer_text: "Connected 24/7",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "silicon-valley",
        category: ThemeCategory::ModernTech,
        colors: PaletteDefinition {
            primary: "#4338ca",
            primary_hover: "#3730a3",
            secondary: "#eef2ff",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#c7d2fe",
            background: "#ffffff",
            received: "#e0e7ff",
            sent: "#4338ca",
            accent: "#10b981",
            surface: "#f9fafb",
        },
        branding: BrandingDefinition {
            company_name: "StartupTech",
            support_title: "Tech Support",
            support_subtitle: "Innovation at scale",
            placeholder: "Disrupt with your question...",
            footer_text: "Scaling support globally",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "blockchain",
        category: ThemeCategory::ModernTech,
        colors: PaletteDefinition {
            primary: "#059669",
            primary_hover: "#047857",
            secondary: "#0f172a",
            text: "#ffffff",
            text_secondary: "#94a3b8",
            border: "#334155",
            background: "#1e293b",
            received: "#334155",
            sent: "#059669",
            accent: "#f59e0b",
            surface: "#0f172a",
        },
        branding: BrandingDefinition {
            company_name: "CryptoFlow",
            support_title: "DeFi Support",
            support_subtitle: "Decentralized assistance",
            placeholder: "What's your wallet query?",
            footer_text: "Secured by blockchain",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "minimalist-gray",
        category: ThemeCategory::ModernTech,
        colors: PaletteDefinition {
            primary: "#1f2937",
            primary_hover: "#111827",
            secondary: "#f9fafb",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#e5e7eb",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#1f2937",
            accent: "#3b82f6",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Minimal Inc",
            support_title: "Support",
            support_subtitle: "Simple solutions",
            placeholder: "Type here...",
            footer_text: "Clear communication",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "corporate-blue",
        category: ThemeCategory::Business,
        colors: PaletteDefinition {
            primary: "#1e40af",
            primary_hover: "#1e3a8a",
            secondary: "#dbeafe",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#d1d5db",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#1e40af",
            accent: "#059669",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Enterprise Corp",
            support_title: "Customer Service",
            support_subtitle: "Professional assistance",
            placeholder: "Describe your inquiry...",
            footer_text: "Business hours: 9AM-5PM EST",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "banking",
        category: ThemeCategory::Business,
        colors: PaletteDefinition {
            primary: "#1e40af",
            primary_hover: "#1e3a8a",
            secondary: "#f8fafc",
            text: "#0f172a",
            text_secondary: "#64748b",
            border: "#cbd5e1",
            background: "#ffffff",
            received: "#f1f5f9",
            sent: "#1e40af",
            accent: "#059669",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "SecureBank",
            support_title: "Banking Support",
            support_subtitle: "Trusted since 1892",
            placeholder: "Banking inquiry...",
            footer_text: "FDIC insured conversations",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "fintech",
        category: ThemeCategory::Business,
        colors: PaletteDefinition {
            primary: "#059669",
            primary_hover: "#047857",
            secondary: "#f9fafb",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#e5e7eb",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#059669",
            accent: "#f59e0b",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "FinanceFlow",
            support_title: "Financial Support",
            support_subtitle: "Your money matters",
            placeholder: "Ask about finances...",
            footer_text: "Secure and confidential",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "real-estate",
        category: ThemeCategory::Business,
        colors: PaletteDefinition {
            primary: "#92400e",
            primary_hover: "#78350f",
            secondary: "#f9fafb",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#d1d5db",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#92400e",
            accent: "#059669",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Prime Properties",
            support_title: "Property Support",
            support_subtitle: "Building dreams",
            placeholder: "Find your home...",
            footer_text: "Your property partner",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "academic",
        category: ThemeCategory::Business,
        colors: PaletteDefinition {
            primary: "#1e40af",
            primary_hover: "#1e3a8a",
            secondary: "#eff6ff",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#93c5fd",
            background: "#ffffff",
            received: "#dbeafe",
            sent: "#1e40af",
            accent: "#059669",
            surface: "#f8fafc",
        },
        branding: BrandingDefinition {
            company_name: "EduTech University",
            support_title: "Academic Support",
            support_subtitle: "Learning together",
            placeholder: "Ask your question...",
            footer_text: "Knowledge is power",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "aviation",
        category: ThemeCategory::Business,
        colors: PaletteDefinition {
            primary: "#1e40af",
            primary_hover: "#1e3a8a",
            secondary: "#dbeafe",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#93c5fd",
            background: "#ffffff",
            received: "#dbeafe",
            sent: "#1e40af",
            accent: "#dc2626",
            surface: "#f8fafc",
        },
        branding: BrandingDefinition {
            company_name: "SkyLine Airways",
            support_title: "Flight Support",
            support_subtitle: "Soaring above expectations",
            placeholder: "Ready for takeoff?",
            footer_text: "Flight support 24/7",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "automotive",
        category: ThemeCategory::Business,
        colors: PaletteDefinition {
            primary: "#dc2626",
            primary_hover: "#b91c1c",
            secondary: "#1f2937",
            text: "#ffffff",
            text_secondary: "#d1d5db",
            border: "#374151",
            background: "#111827",
            received: "#374151",
            sent: "#dc2626",
            accent: "#fbbf24",
            surface: "#1f2937",
        },
        branding: BrandingDefinition {
            company_name: "AutoTech Motors",
            support_title: "Service Center",
            support_subtitle: "Performance driven",
            placeholder: "Engine your question...",
            footer_text: "Rev up your support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "forest-green",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#059669",
            primary_hover: "#047857",
            secondary: "#f0fdf4",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#d1d5db",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#059669",
            accent: "#f59e0b",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "EcoTech",
            support_title: "Customer Support",
            support_subtitle: "Growing together",
            placeholder: "Type your message...",
            footer_text: "We typically reply in a few minutes",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "earth-tone",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#92400e",
            primary_hover: "#78350f",
            secondary: "#fef3c7",
            text: "#1c1917",
            text_secondary: "#78716c",
            border: "#d6d3d1",
            background: "#fffbeb",
            received: "#fef3c7",
            sent: "#92400e",
            accent: "#dc2626",
            surface: "#fefdf8",
        },
        branding: BrandingDefinition {
            company_name: "Artisan Co",
            support_title: "Customer Care",
            support_subtitle: "Handcrafted support",
            placeholder: "How can we help?",
            footer_text: "Crafted responses in minutes",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "wellness-green",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#16a34a",
            primary_hover: "#15803d",
            secondary: "#f0fdf4",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#d1fae5",
            background: "#ffffff",
            received: "#f0fdf4",
            sent: "#16a34a",
            accent: "#3b82f6",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Wellness Co",
            support_title: "Wellness Support",
            support_subtitle: "Mindful assistance",
            placeholder: "Share your thoughts...",
            footer_text: "Peaceful support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "ocean-blue",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#0ea5e9",
            primary_hover: "#0284c7",
            secondary: "#f0f9ff",
            text: "#1e293b",
            text_secondary: "#64748b",
            border: "#cbd5e1",
            background: "#ffffff",
            received: "#f1f5f9",
            sent: "#0ea5e9",
            accent: "#06b6d4",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "OceanTech",
            support_title: "Customer Support",
            support_subtitle: "Smooth sailing ahead",
            placeholder: "Type your message...",
            footer_text: "We typically reply in a few minutes",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "deep-sea",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#1e3a8a",
            primary_hover: "#1e40af",
            secondary: "#eff6ff",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#d1d5db",
            background: "#ffffff",
            received: "#f8fafc",
            sent: "#1e3a8a",
            accent: "#0891b2",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "DeepTech",
            support_title: "Technical Support",
            support_subtitle: "Deep expertise",
            placeholder: "Describe your issue...",
            footer_text: "Expert help available",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "winter-frost",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#0369a1",
            primary_hover: "#0c4a6e",
            secondary: "#f0f9ff",
            text: "#0f172a",
            text_secondary: "#64748b",
            border: "#bae6fd",
            background: "#ffffff",
            received: "#e0f2fe",
            sent: "#0369a1",
            accent: "#06b6d4",
            surface: "#f8fafc",
        },
        branding: BrandingDefinition {
            company_name: "Frost Solutions",
            support_title: "Customer Support",
            support_subtitle: "Cool & refreshing help",
            placeholder: "What's on your mind?",
            footer_text: "Crystal clear responses",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "autumn-harvest",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#c2410c",
            primary_hover: "#9a3412",
            secondary: "#fff7ed",
            text: "#1c1917",
            text_secondary: "#78716c",
            border: "#fed7aa",
            background: "#fffbeb",
            received: "#fef3c7",
            sent: "#c2410c",
            accent: "#dc2626",
            surface: "#fefdf8",
        },
        branding: BrandingDefinition {
            company_name: "Harvest Co",
            support_title: "Support Specialists",
            support_subtitle: "Gathering solutions",
            placeholder: "Share your harvest...",
            footer_text: "Seasonal support available",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "spring-bloom",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#15803d",
            primary_hover: "#166534",
            secondary: "#f0fdf4",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#bbf7d0",
            background: "#ffffff",
            received: "#dcfce7",
            sent: "#15803d",
            accent: "#fb7185",
            surface: "#f9fafb",
        },
        branding: BrandingDefinition {
            company_name: "Bloom Tech",
            support_title: "Growth Support",
            support_subtitle: "Fresh beginnings",
            placeholder: "Plant your question...",
            footer_text: "Blooming solutions",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "tropical-paradise",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#059669",
            primary_hover: "#047857",
            secondary: "#ecfdf5",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#a7f3d0",
            background: "#ffffff",
            received: "#d1fae5",
            sent: "#059669",
            accent: "#f59e0b",
            surface: "#f0fdfa",
        },
        branding: BrandingDefinition {
            company_name: "Paradise Resort",
            support_title: "Concierge Service",
            support_subtitle: "Paradise found",
            placeholder: "Aloha! What's needed?",
            footer_text: "Island time support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "mountain-adventure",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#374151",
            primary_hover: "#1f2937",
            secondary: "#f3f4f6",
            text: "#111827",
            text_secondary: "#6b7280",
            border: "#d1d5db",
            background: "#ffffff",
            received: "#f9fafb",
            sent: "#374151",
            accent: "#059669",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Peak Adventures",
            support_title: "Trail Support",
            support_subtitle: "Reach new heights",
            placeholder: "Summit your question...",
            footer_text: "Peak performance support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "desert-sunset",
        category: ThemeCategory::Nature,
        colors: PaletteDefinition {
            primary: "#c2410c",
            primary_hover: "#9a3412",
            secondary: "#fff7ed",
            text: "#1c1917",
            text_secondary: "#78716c",
            border: "#fed7aa",
            background: "#fef3c7",
            received: "#fef3c7",
            sent: "#c2410c",
            accent: "#7c3aed",
            surface: "#fefdf8",
        },
        branding: BrandingDefinition {
            company_name: "Desert Mirage",
            support_title: "Oasis Support",
            support_subtitle: "Cool relief ahead",
            placeholder: "Share your journey...",
            footer_text: "Refreshing desert support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "electric-pink",
        category: ThemeCategory::Creative,
        colors: PaletteDefinition {
            primary: "#ec4899",
            primary_hover: "#db2777",
            secondary: "#fdf2f8",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#f9a8d4",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#ec4899",
            accent: "#8b5cf6",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "CreativeHub",
            support_title: "Support Team",
            support_subtitle: "Let's create magic",
            placeholder: "Share your ideas...",
            footer_text: "Creative solutions incoming",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "creative-studio",
        category: ThemeCategory::Creative,
        colors: PaletteDefinition {
            primary: "#8b5cf6",
            primary_hover: "#7c3aed",
            secondary: "#faf5ff",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#e879f9",
            background: "#ffffff",
            received: "#fef3ff",
            sent: "#8b5cf6",
            accent: "#ec4899",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Creative Studio",
            support_title: "Creative Support",
            support_subtitle: "Inspire & create",
            placeholder: "Share your vision...",
            footer_text: "Creativity flows here",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "rainbow",
        category: ThemeCategory::Creative,
        colors: PaletteDefinition {
            primary: "#3b82f6",
            primary_hover: "#2563eb",
            secondary: "#fef2f2",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#e5e7eb",
            background: "#ffffff",
            received: "#f0f9ff",
            sent: "#3b82f6",
            accent: "#f59e0b",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Colorful Co",
            support_title: "Rainbow Support",
            support_subtitle: "Every color welcome",
            placeholder: "Paint your message...",
            footer_text: "Diverse support team",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "pastel-dream",
        category: ThemeCategory::Creative,
        colors: PaletteDefinition {
            primary: "#a78bfa",
            primary_hover: "#8b5cf6",
            secondary: "#fef7ff",
            text: "#374151",
            text_secondary: "#9ca3af",
            border: "#e9d5ff",
            background: "#ffffff",
            received: "#f3e8ff",
            sent: "#a78bfa",
            accent: "#fb7185",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "DreamCo",
            support_title: "Gentle Support",
            support_subtitle: "Soft solutions",
            placeholder: "Share gently...",
            footer_text: "Peaceful support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "art-deco",
        category: ThemeCategory::Creative,
        colors: PaletteDefinition {
            primary: "#451a03",
            primary_hover: "#78350f",
            secondary: "#fef3c7",
            text: "#1c1917",
            text_secondary: "#78716c",
            border: "#d6d3d1",
            background: "#fffbeb",
            received: "#fef3c7",
            sent: "#451a03",
            accent: "#dc2626",
            surface: "#fefdf8",
        },
        branding: BrandingDefinition {
            company_name: "Gatsby & Co",
            support_title: "Elegant Support",
            support_subtitle: "The bee's knees",
            placeholder: "What's the word?",
            footer_text: "Simply divine service",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "vintage",
        category: ThemeCategory::Creative,
        colors: PaletteDefinition {
            primary: "#92400e",
            primary_hover: "#78350f",
            secondary: "#fef7ed",
            text: "#1c1917",
            text_secondary: "#a8a29e",
            border: "#e7e5e4",
            background: "#faf5f0",
            received: "#fed7aa",
            sent: "#92400e",
            accent: "#dc2626",
            surface: "#fefcf9",
        },
        branding: BrandingDefinition {
            company_name: "Vintage Goods",
            support_title: "Heritage Support",
            support_subtitle: "Time-honored service",
            placeholder: "Share your tale...",
            footer_text: "Classic support since 1890",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "elegant-purple",
        category: ThemeCategory::Premium,
        colors: PaletteDefinition {
            primary: "#8b5cf6",
            primary_hover: "#7c3aed",
            secondary: "#faf5ff",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#e5e7eb",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#8b5cf6",
            accent: "#ec4899",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Premium Co",
            support_title: "Concierge Support",
            support_subtitle: "Excellence in service",
            placeholder: "How may we assist?",
            footer_text: "Premium support guaranteed",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "royal-gold",
        category: ThemeCategory::Premium,
        colors: PaletteDefinition {
            primary: "#d97706",
            primary_hover: "#b45309",
            secondary: "#fffbeb",
            text: "#1c1917",
            text_secondary: "#78716c",
            border: "#fed7aa",
            background: "#ffffff",
            received: "#fef3c7",
            sent: "#d97706",
            accent: "#dc2626",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Luxury Brands",
            support_title: "VIP Support",
            support_subtitle: "Exceptional service",
            placeholder: "Your request...",
            footer_text: "White-glove service awaits",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "rose-gold",
        category: ThemeCategory::Premium,
        colors: PaletteDefinition {
            primary: "#be185d",
            primary_hover: "#9d174d",
            secondary: "#fdf2f8",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#f9a8d4",
            background: "#ffffff",
            received: "#fce7f3",
            sent: "#be185d",
            accent: "#f59e0b",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Rose Gold Co",
            support_title: "Luxury Support",
            support_subtitle: "Refined assistance",
            placeholder: "Share your needs...",
            footer_text: "Luxurious support experience",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "platinum-elite",
        category: ThemeCategory::Premium,
        colors: PaletteDefinition {
            primary: "#71717a",
            primary_hover: "#52525b",
            secondary: "#fafafa",
            text: "#0a0a0a",
            text_secondary: "#737373",
            border: "#e4e4e7",
            background: "#ffffff",
            received: "#f4f4f5",
            sent: "#71717a",
            accent: "#d4d4d8",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Platinum Elite",
            support_title: "Elite Concierge",
            support_subtitle: "Unparalleled service",
            placeholder: "Your exclusive request...",
            footer_text: "Elite support reserved for you",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "marble",
        category: ThemeCategory::Premium,
        colors: PaletteDefinition {
            primary: "#6b7280",
            primary_hover: "#4b5563",
            secondary: "#f9fafb",
            text: "#111827",
            text_secondary: "#6b7280",
            border: "#e5e7eb",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#6b7280",
            accent: "#d4d4d8",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Marble Palace",
            support_title: "Refined Support",
            support_subtitle: "Carved in excellence",
            placeholder: "Sculpt your question...",
            footer_text: "Timeless elegance",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "wood-grain",
        category: ThemeCategory::Premium,
        colors: PaletteDefinition {
            primary: "#451a03",
            primary_hover: "#78350f",
            secondary: "#fef3c7",
            text: "#1c1917",
            text_secondary: "#78716c",
            border: "#d6d3d1",
            background: "#fffbeb",
            received: "#fef3c7",
            sent: "#451a03",
            accent: "#16a34a",
            surface: "#fefdf8",
        },
        branding: BrandingDefinition {
            company_name: "Woodcraft Co",
            support_title: "Artisan Support",
            support_subtitle: "Handcrafted help",
            placeholder: "Carve your message...",
            footer_text: "Grain by grain excellence",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "gaming",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#7c3aed",
            primary_hover: "#6d28d9",
            secondary: "#1a1a1a",
            text: "#ffffff",
            text_secondary: "#a3a3a3",
            border: "#404040",
            background: "#0a0a0a",
            received: "#262626",
            sent: "#7c3aed",
            accent: "#00ff00",
            surface: "#141414",
        },
        branding: BrandingDefinition {
            company_name: "GameHub",
            support_title: "Player Support",
            support_subtitle: "Game on!",
            placeholder: "What's the quest?",
            footer_text: "24/7 gaming support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "entertainment",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#dc2626",
            primary_hover: "#b91c1c",
            secondary: "#fef2f2",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#fecaca",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#dc2626",
            accent: "#f59e0b",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "ShowTime",
            support_title: "Fan Support",
            support_subtitle: "The show must go on",
            placeholder: "What's entertaining you?",
            footer_text: "Showtime support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "retro",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#ff00ff",
            primary_hover: "#e600e6",
            secondary: "#000080",
            text: "#ffffff",
            text_secondary: "#cccccc",
            border: "#00ffff",
            background: "#800080",
            received: "#000080",
            sent: "#ff00ff",
            accent: "#ffff00",
            surface: "#4b0082",
        },
        branding: BrandingDefinition {
            company_name: "RetroTech",
            support_title: "Radical Support",
            support_subtitle: "Totally awesome",
            placeholder: "What's up, dude?",
            footer_text: "Gnarly support vibes",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "fitness",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#dc2626",
            primary_hover: "#b91c1c",
            secondary: "#fef2f2",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#fecaca",
            background: "#ffffff",
            received: "#fee2e2",
            sent: "#dc2626",
            accent: "#16a34a",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "FitLife Gym",
            support_title: "Trainer Support",
            support_subtitle: "No pain, no gain",
            placeholder: "What's your goal?",
            footer_text: "Sweat equity support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "ocean-sports",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#0284c7",
            primary_hover: "#0369a1",
            secondary: "#f0f9ff",
            text: "#0f172a",
            text_secondary: "#64748b",
            border: "#7dd3fc",
            background: "#ffffff",
            received: "#e0f2fe",
            sent: "#0284c7",
            accent: "#06b6d4",
            surface: "#f8fafc",
        },
        branding: BrandingDefinition {
            company_name: "Wave Riders",
            support_title: "Adventure Support",
            support_subtitle: "Ride the wave",
            placeholder: "Catch your question...",
            footer_text: "Making waves in support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "coffee-shop",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#92400e",
            primary_hover: "#78350f",
            secondary: "#fef3c7",
            text: "#1c1917",
            text_secondary: "#78716c",
            border: "#d6d3d1",
            background: "#fffbeb",
            received: "#fef3c7",
            sent: "#92400e",
            accent: "#dc2626",
            surface: "#fefdf8",
        },
        branding: BrandingDefinition {
            company_name: "Brew & Chat",
            support_title: "Barista Support",
            support_subtitle: "Freshly brewed help",
            placeholder: "What's brewing?",
            footer_text: "Served with love",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "wine-dine",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#7c2d12",
            primary_hover: "#991b1b",
            secondary: "#fef2f2",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#fecaca",
            background: "#ffffff",
            received: "#fee2e2",
            sent: "#7c2d12",
            accent: "#d97706",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Château Support",
            support_title: "Sommelier Service",
            support_subtitle: "Aged to perfection",
            placeholder: "Uncork your question...",
            footer_text: "Vintage support since 1952",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "jazz-club",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#451a03",
            primary_hover: "#92400e",
            secondary: "#1f2937",
            text: "#fbbf24",
            text_secondary: "#d1d5db",
            border: "#374151",
            background: "#111827",
            received: "#374151",
            sent: "#451a03",
            accent: "#f59e0b",
            surface: "#1f2937",
        },
        branding: BrandingDefinition {
            company_name: "Jazz Lounge",
            support_title: "Smooth Support",
            support_subtitle: "All that jazz",
            placeholder: "Drop that note...",
            footer_text: "Improvised solutions",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "rock-concert",
        category: ThemeCategory::Lifestyle,
        colors: PaletteDefinition {
            primary: "#dc2626",
            primary_hover: "#b91c1c",
            secondary: "#0a0a0a",
            text: "#ffffff",
            text_secondary: "#a3a3a3",
            border: "#404040",
            background: "#000000",
            received: "#1f1f1f",
            sent: "#dc2626",
            accent: "#fbbf24",
            surface: "#111111",
        },
        branding: BrandingDefinition {
            company_name: "Rock Support",
            support_title: "Roadie Help",
            support_subtitle: "Turn it up to 11",
            placeholder: "Rock your question!",
            footer_text: "Amplified support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "medical",
        category: ThemeCategory::Specialty,
        colors: PaletteDefinition {
            primary: "#2563eb",
            primary_hover: "#1d4ed8",
            secondary: "#f0f9ff",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#e5e7eb",
            background: "#ffffff",
            received: "#f8fafc",
            sent: "#2563eb",
            accent: "#dc2626",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "HealthCare Plus",
            support_title: "Patient Support",
            support_subtitle: "Your health matters",
            placeholder: "How can we help?",
            footer_text: "Confidential and secure",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "library",
        category: ThemeCategory::Specialty,
        colors: PaletteDefinition {
            primary: "#7c2d12",
            primary_hover: "#991b1b",
            secondary: "#fef7ed",
            text: "#1c1917",
            text_secondary: "#78716c",
            border: "#e7e5e4",
            background: "#fffbeb",
            received: "#fef3c7",
            sent: "#7c2d12",
            accent: "#059669",
            surface: "#fefdf8",
        },
        branding: BrandingDefinition {
            company_name: "Digital Library",
            support_title: "Research Support",
            support_subtitle: "Shh... quiet help",
            placeholder: "Whisper your question...",
            footer_text: "Silent but effective",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "zen",
        category: ThemeCategory::Specialty,
        colors: PaletteDefinition {
            primary: "#64748b",
            primary_hover: "#475569",
            secondary: "#f8fafc",
            text: "#0f172a",
            text_secondary: "#94a3b8",
            border: "#e2e8f0",
            background: "#ffffff",
            received: "#f1f5f9",
            sent: "#64748b",
            accent: "#16a34a",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Zen Solutions",
            support_title: "Mindful Support",
            support_subtitle: "Inner peace through service",
            placeholder: "Breathe and type...",
            footer_text: "Peaceful resolutions",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "energetic",
        category: ThemeCategory::Specialty,
        colors: PaletteDefinition {
            primary: "#ef4444",
            primary_hover: "#dc2626",
            secondary: "#fef2f2",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#fecaca",
            background: "#ffffff",
            received: "#fee2e2",
            sent: "#ef4444",
            accent: "#f59e0b",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Energy Co",
            support_title: "Power Support",
            support_subtitle: "Charged up to help!",
            placeholder: "Energize your question!",
            footer_text: "High-voltage support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "nordic",
        category: ThemeCategory::Specialty,
        colors: PaletteDefinition {
            primary: "#374151",
            primary_hover: "#1f2937",
            secondary: "#f9fafb",
            text: "#111827",
            text_secondary: "#6b7280",
            border: "#e5e7eb",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#374151",
            accent: "#3b82f6",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Nordic Design",
            support_title: "Design Support",
            support_subtitle: "Lagom philosophy",
            placeholder: "Enkelt spørsmål...",
            footer_text: "Scandinavian simplicity",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "mediterranean",
        category: ThemeCategory::Specialty,
        colors: PaletteDefinition {
            primary: "#0891b2",
            primary_hover: "#0e7490",
            secondary: "#cffafe",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#a7f3d0",
            background: "#ffffff",
            received: "#ecfdf5",
            sent: "#0891b2",
            accent: "#f59e0b",
            surface: "#f0fdfa",
        },
        branding: BrandingDefinition {
            company_name: "Costa Support",
            support_title: "Mediterranean Care",
            support_subtitle: "Warm hospitality",
            placeholder: "Ciao! How can we help?",
            footer_text: "La dolce vita support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "monochrome",
        category: ThemeCategory::Novelty,
        colors: PaletteDefinition {
            primary: "#000000",
            primary_hover: "#1f1f1f",
            secondary: "#f5f5f5",
            text: "#000000",
            text_secondary: "#666666",
            border: "#cccccc",
            background: "#ffffff",
            received: "#f0f0f0",
            sent: "#000000",
            accent: "#333333",
            surface: "#ffffff",
        },
        branding: BrandingDefinition {
            company_name: "Classic Co",
            support_title: "Support",
            support_subtitle: "Timeless service",
            placeholder: "Type message...",
            footer_text: "Classic support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "cosmic",
        category: ThemeCategory::Novelty,
        colors: PaletteDefinition {
            primary: "#5b21b6",
            primary_hover: "#4c1d95",
            secondary: "#1e1b4b",
            text: "#ffffff",
            text_secondary: "#c4b5fd",
            border: "#6d28d9",
            background: "#0f0f23",
            received: "#312e81",
            sent: "#5b21b6",
            accent: "#fbbf24",
            surface: "#1e1b4b",
        },
        branding: BrandingDefinition {
            company_name: "Cosmic Solutions",
            support_title: "Space Support",
            support_subtitle: "To infinity and beyond",
            placeholder: "Launch your question...",
            footer_text: "Universal support coverage",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "galaxy",
        category: ThemeCategory::Novelty,
        colors: PaletteDefinition {
            primary: "#7c3aed",
            primary_hover: "#6d28d9",
            secondary: "#1e1b4b",
            text: "#ffffff",
            text_secondary: "#a78bfa",
            border: "#8b5cf6",
            background: "#0c0a1f",
            received: "#2d1b69",
            sent: "#7c3aed",
            accent: "#ec4899",
            surface: "#1e1b4b",
        },
        branding: BrandingDefinition {
            company_name: "Galaxy Corp",
            support_title: "Galactic Support",
            support_subtitle: "Across the universe",
            placeholder: "Beam your message...",
            footer_text: "Intergalactic assistance",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "valentine",
        category: ThemeCategory::Novelty,
        colors: PaletteDefinition {
            primary: "#be185d",
            primary_hover: "#9d174d",
            secondary: "#fdf2f8",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#f9a8d4",
            background: "#ffffff",
            received: "#fce7f3",
            sent: "#be185d",
            accent: "#dc2626",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "Cupid's Corner",
            support_title: "Love Support",
            support_subtitle: "Spreading love daily",
            placeholder: "Share your heart...",
            footer_text: "Love is in the air",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "halloween",
        category: ThemeCategory::Novelty,
        colors: PaletteDefinition {
            primary: "#ea580c",
            primary_hover: "#c2410c",
            secondary: "#1a1a1a",
            text: "#ffffff",
            text_secondary: "#d1d5db",
            border: "#404040",
            background: "#000000",
            received: "#2d1b00",
            sent: "#ea580c",
            accent: "#7c3aed",
            surface: "#111111",
        },
        branding: BrandingDefinition {
            company_name: "Spooky Support",
            support_title: "Ghostly Help",
            support_subtitle: "Boo-tiful assistance",
            placeholder: "What's haunting you?",
            footer_text: "Frighteningly good support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "thunderstorm",
        category: ThemeCategory::Novelty,
        colors: PaletteDefinition {
            primary: "#1e3a8a",
            primary_hover: "#1e40af",
            secondary: "#0f172a",
            text: "#ffffff",
            text_secondary: "#cbd5e1",
            border: "#475569",
            background: "#1e293b",
            received: "#334155",
            sent: "#1e3a8a",
            accent: "#fbbf24",
            surface: "#0f172a",
        },
        branding: BrandingDefinition {
            company_name: "Storm Solutions",
            support_title: "Weather Support",
            support_subtitle: "Riding the storm",
            placeholder: "Thunder your question...",
            footer_text: "Electrifying support",
        },
        width: 360,
        height: 500,
    },
    ThemeDefinition {
        key: "sunset-orange",
        category: ThemeCategory::Color,
        colors: PaletteDefinition {
            primary: "#ea580c",
            primary_hover: "#dc2626",
            secondary: "#fff7ed",
            text: "#1f2937",
            text_secondary: "#6b7280",
            border: "#fed7aa",
            background: "#ffffff",
            received: "#f3f4f6",
            sent: "#ea580c",
            accent: "#fbbf24",
            surface: "#fefefe",
        },
        branding: BrandingDefinition {
            company_name: "SunTech",
            support_title: "Customer Support",
            support_subtitle: "Bright solutions ahead",
            placeholder: "Type your message...",
            footer_text: "We typically reply in a few minutes",
        },
        width: 360,
        height: 500,
    },
];
