//! Kalavya.Co brand content
//!
//! Everything shown by the guide is fixed, literal content. It lives here as
//! typed constants so the presentation layer only decides layout.

use ratatui::style::Color;

use super::asset::AssetSource;

pub const BRAND_NAME: &str = "Kalavya.Co";
pub const DESIGN_CONTACT: &str = "design@kalavya.co";

pub const LOGO_PRIMARY: AssetSource = AssetSource::Local("side.png");
pub const LOGO_SECONDARY: AssetSource = AssetSource::Local("side 2.png");
pub const LOGO_ICON: AssetSource = AssetSource::Local("logo.png");

/// A palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
    pub cmyk: &'static str,
}

impl ColorSwatch {
    /// Parses `hex` (`#RRGGBB`) into a terminal color.
    pub fn rgb(&self) -> Option<Color> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Whether light text reads better on top of this swatch.
    pub fn is_dark(&self) -> bool {
        match self.rgb() {
            Some(Color::Rgb(r, g, b)) => {
                // ITU-R BT.601 luma
                let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
                luma < 150_000
            }
            _ => false,
        }
    }
}

pub const DEEP_UMBER: ColorSwatch = ColorSwatch {
    name: "Deep Umber",
    hex: "#5C3317",
    cmyk: "45, 70, 90, 50",
};
pub const HERITAGE_CREAM: ColorSwatch = ColorSwatch {
    name: "Heritage Cream",
    hex: "#F5EBD7",
    cmyk: "2, 5, 12, 0",
};
pub const MITHILA_RED: ColorSwatch = ColorSwatch {
    name: "Mithila Red",
    hex: "#A63C2E",
    cmyk: "20, 85, 90, 10",
};
pub const OCHRE_YELLOW: ColorSwatch = ColorSwatch {
    name: "Ochre Yellow",
    hex: "#D9A441",
    cmyk: "15, 35, 85, 0",
};
pub const SLATE_TEAL: ColorSwatch = ColorSwatch {
    name: "Slate Teal",
    hex: "#2E5C6E",
    cmyk: "80, 45, 35, 20",
};

pub const PALETTE: [ColorSwatch; 5] = [
    DEEP_UMBER,
    HERITAGE_CREAM,
    MITHILA_RED,
    OCHRE_YELLOW,
    SLATE_TEAL,
];

/// Share of a layout each color should occupy, in percent. Sums to 100.
pub const USAGE_RATIO: [(ColorSwatch, u16); 4] = [
    (HERITAGE_CREAM, 60),
    (DEEP_UMBER, 25),
    (OCHRE_YELLOW, 10),
    (SLATE_TEAL, 5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreValue {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STRATEGY_EYEBROW: &str = "Visual Identity System v1.0";
pub const STRATEGY_TITLE: &str = "Brand Strategy";
pub const STRATEGY_INTRO: &str = "Defining the soul of Kalavya.Co through a synthesis of ancient Mithila tradition and contemporary minimalist design.";
pub const MISSION: &str = "\"To bridge the gap between rural master artisans and the modern lifestyle, preserving 2,500 years of heritage through authentic storytelling and ethical commerce.\"";

pub const CORE_VALUES: [CoreValue; 3] = [
    CoreValue {
        number: "01",
        title: "Authenticity",
        description: "We honor the true roots of Mithila art. Every piece tells a genuine story, directly from the hands of artisans in the Madhubani region, free from industrial replication.",
    },
    CoreValue {
        number: "02",
        title: "Craftsmanship",
        description: "We revere the human touch. The slight imperfections in hand-drawn lines are not flaws but signatures of dedication, time, and ancestral skill passed down through generations.",
    },
    CoreValue {
        number: "03",
        title: "Minimalism",
        description: "We believe tradition breathes best in open spaces. Our design philosophy strips away the unnecessary, allowing the intricate details of the art to take center stage.",
    },
];

pub const PALETTE_INTRO: &str = "Our palette is earthy and archival, inspired by the natural pigments used in traditional Madhubani paintings (ochre, lamp soot, indigo, and terracotta) balanced with the warmth of aged paper.";

pub const MISSION_TITLE: &str = "Our Mission";
pub const CORE_VALUES_TITLE: &str = "Core Values";
pub const PALETTE_TITLE: &str = "Color Palette";
pub const USAGE_RATIO_TITLE: &str = "Usage Ratio";

pub const LOGO_EYEBROW: &str = "Section 02";
pub const LOGO_TITLE: &str = "Logo System";
pub const LOCKUPS_TITLE: &str = "Logo Lockups";
pub const CLEAR_SPACE_TITLE: &str = "Clear Space";
pub const MINIMUM_SIZE_TITLE: &str = "Minimum Size";
pub const LOGO_INTRO: &str = "The Kalavya.Co logo is the most immediate representation of our brand. It balances the intricate heritage of Mithila art with modern minimalism.";
pub const LOCKUPS_TEXT: &str = "Our logo system offers flexibility to maintain legibility and balance. The combinations of the Mithila Elephant icon and the Kalavya.Co wordmark are formulated for specific spatial needs while conveying wisdom and sophistication.";
pub const LOCKUPS_USAGE_NOTE: &str = "Use Lockup 01 or 02 for horizontal spaces to give the brand more prominence. Ensure consistent padding and horizontal alignment when placing them in headers or footers.";

/// A labelled logo lockup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lockup {
    pub label: &'static str,
    pub asset: ImageAsset,
}

pub const LOCKUPS: [Lockup; 2] = [
    Lockup {
        label: "01. Primary Horizontal",
        asset: ImageAsset {
            source: LOGO_PRIMARY,
            alt: "Horizontal Logo Lockup",
        },
    },
    Lockup {
        label: "02. Secondary Horizontal",
        asset: ImageAsset {
            source: LOGO_SECONDARY,
            alt: "Secondary Horizontal Lockup",
        },
    },
];

pub const CLEAR_SPACE_TEXT: &str = "To ensure visibility and impact, the logo must always be surrounded by a minimum amount of clear space. The exclusion zone is defined by the height of the letter 'K' from the wordmark.";
pub const CLEAR_SPACE_LEGEND: &str = "x = height of 'K'";
pub const MINIMUM_SIZE_TEXT: &str =
    "The logo should never be used smaller than the minimum sizes specified to ensure legibility.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumSize {
    pub medium: &'static str,
    pub requirement: &'static str,
    pub asset: ImageAsset,
}

pub const MINIMUM_SIZES: [MinimumSize; 2] = [
    MinimumSize {
        medium: "Digital",
        requirement: "120px width minimum",
        asset: ImageAsset {
            source: LOGO_PRIMARY,
            alt: "Minimal Digital Logo",
        },
    },
    MinimumSize {
        medium: "Print",
        requirement: "30mm width minimum",
        asset: ImageAsset {
            source: LOGO_SECONDARY,
            alt: "Minimal Print Logo",
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSample {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeFace {
    pub name: &'static str,
    pub role: &'static str,
    pub samples: &'static [TypeSample],
}

pub const TYPOGRAPHY_TITLE: &str = "Typography & Imagery";
pub const TYPEFACES_TITLE: &str = "Typeface Hierarchy";
pub const GRAPHIC_ELEMENTS_TITLE: &str = "Graphic Elements";
pub const IMAGERY_TITLE: &str = "Imagery Guidelines";
pub const DONTS_TITLE: &str = "Brand Don'ts";
pub const TYPOGRAPHY_INTRO: &str = "Our visual language combines the grandeur of tradition with modern clarity. Typography establishes hierarchy, while imagery captures the soul of Mithila art.";

pub const TYPEFACES: [TypeFace; 3] = [
    TypeFace {
        name: "Cinzel",
        role: "Headings & Titles",
        samples: &[
            TypeSample {
                label: "Display (H1)",
                text: "Tradition Redefined.",
            },
            TypeSample {
                label: "Section Header (H2)",
                text: "The Artisanal Collection",
            },
        ],
    },
    TypeFace {
        name: "Montserrat",
        role: "Sub-headings & UI Elements",
        samples: &[
            TypeSample {
                label: "Subheading (H3)",
                text: "Preserving 2,500 Years of Artistry",
            },
            TypeSample {
                label: "Button / Nav",
                text: "SHOP COLLECTION",
            },
        ],
    },
    TypeFace {
        name: "Lato",
        role: "Body Copy & Long Form",
        samples: &[TypeSample {
            label: "Paragraph (P)",
            text: "Mithila art is characterized by its eye-catching geometrical patterns. There is ritual content for particular occasions, such as birth or marriage, and festivals, such as Holi, Surya Shasti, Kali Puja, Upanayana, Durga Puja. At Kalavya.Co, we ensure readability is paramount while maintaining an elegant tone.",
        }],
    },
];

pub const DIVIDER_TEXT: &str = "The \"Double Line\" divider is our primary separator. It mimics the framing often found in traditional Mithila paintings. Use it to break sections with elegance.";
pub const DIVIDER_GLYPH: &str = "❖";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAsset {
    pub source: AssetSource,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageGuideline {
    pub image: ImageAsset,
    pub title: &'static str,
    pub description: &'static str,
}

pub const IMAGE_GUIDELINES: [ImageGuideline; 2] = [
    ImageGuideline {
        image: ImageAsset {
            source: AssetSource::Remote("https://lh3.googleusercontent.com/aida-public/AB6AXuBCUbYpMF5K-DUfnkeSbINmnwg2iP9LT7rWxGD273_ELN4vPvVVFMi_QusVetNfiXoy1n0sOAsE2p94TqZxIGgz6jFpcixe-uh25mfS3Taq9MB0UiFBDQkgz9V3uV6Wqjidq9RE5khgTkE1IeEuvLcr4UQG6CDGEVFUfh6hFK-El3LFdEBfQZe_ozyRaGidXDcU0MtnltynToj3oEVmpsK333GR3gUCuFXhL57Cwg6gtchXJRWabTqn9N2hQB3C83OgFmTWcDicwZc"),
            alt: "'The Hero' Lighting",
        },
        title: "'The Hero' Lighting",
        description: "Use high-contrast lighting that creates depth. Product shots should be set against neutral, natural textures like light wood, stone, or marble to let the colorful art pop.",
    },
    ImageGuideline {
        image: ImageAsset {
            source: AssetSource::Remote("https://lh3.googleusercontent.com/aida-public/AB6AXuAXGS2ObeXGmAZ8oZUiiJ6yHDenV8iPwbKMGq-YwaQekMQUxGIb4LaeZtxuVYZ0PL7Wx9v0N-zHy2fEdiVo8vRImS-wbHOS53XVP2MIsHnsCFUKBSRz9QSQOxW8nC5Lmx7GE6_oxA7G1vVPzewy24etgOSUYwBh70rSBnnLssXAfa26HvAdxWcBf1pb487W5ANdaVT-1uulkKAtc4dmTIz3JeWYA1NuRSy_k1Fka1r62v-Xxcv7iWNn6c2zj7HFKZyGBeDck6kjdjk"),
            alt: "Contextual Lifestyle",
        },
        title: "Contextual Lifestyle",
        description: "Show products in use within modern, minimalist environments. Avoid clutter. The artwork should always be the focal point of the composition.",
    },
];

/// A rule from the "Brand Don'ts" list, with a sample of the mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DontRule {
    pub rule: &'static str,
    pub sample: &'static str,
}

pub const BRAND_DONTS: [DontRule; 3] = [
    DontRule {
        rule: "Do not stretch or distort the logo.",
        sample: "K a l a v y a",
    },
    DontRule {
        rule: "Do not use clashing neon colors.",
        sample: "Kalavya.Co",
    },
    DontRule {
        rule: "Do not use heavy drop shadows on text.",
        sample: "Bad Shadow",
    },
];

pub const HELP_TITLE: &str = "Need help?";
pub const HELP_TEXT: &str = "Contact the design team for approval on new assets.";

pub const MOCKUPS_EYEBROW: &str = "Section 04";
pub const MOCKUPS_TITLE: &str = "Design Mockups";
pub const MOCKUPS_INTRO: &str = "A glimpse into how the Kalavya.Co brand identity translates across various physical and digital touchpoints, from packaging and stationery to digital experiences.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockupSpec {
    pub image: ImageAsset,
    pub title: &'static str,
    pub description: &'static str,
    /// Logo composited over the photograph, if any.
    pub overlay: Option<AssetSource>,
}

pub const MOCKUPS: [MockupSpec; 6] = [
    MockupSpec {
        image: ImageAsset {
            source: AssetSource::Remote("https://lh3.googleusercontent.com/aida-public/AB6AXuAoW5SG_1PKPX0x-on7XCtRBF4kGpSYiG8r_XEcCZQLAZ2-xk22of-5HQFrSPhqZLaEFpQrfQdbf-S9RXP3gPR5TwDdlEWWIIxxiHT88sTap1-7H0LUeiGpBdzwlAA8ddctiPm-V1i00Y5f_tu27UEEfiEh8Y3QHwE1wDYY1lgkkC3SVifW5U6XS62y_5LnbZsCo2-3v7CoKyo07kKH0Wqk8KMsnJ0S61fvnOFHHQ2KpxU1y0_IJP_LPpv_VtOa3ANYxVgugNovxF4"),
            alt: "Mobile Interface",
        },
        title: "Mobile Interface",
        description: "Digital experience on mobile devices highlighting the artisanal collection with clean typography and ample whitespace.",
        overlay: Some(LOGO_PRIMARY),
    },
    MockupSpec {
        image: ImageAsset {
            source: AssetSource::Remote("https://lh3.googleusercontent.com/aida-public/AB6AXuDIRkryHmBNKpYQR7PcY8ntJFb78F8pQGuETI0sT_15GJWkV4RmArSHGOdiQd_VMXEbzSdfKI1tberAIVUN1duLA1F-o9A-L1S6i1ZGiMIynVJ2S3VG-OcLNbVJiUMAqeXT8v3amYqA_3HP3X17c37Lkey3iG3BBf-ZDTlyorfE0JztzlUvyGxpmPACy1faEnwkPlyDwm6QQHbfaOcnWVvlL2nrfydlvv9jZQnhjo2QAeP2bAVnmPp39mHLx7e6SXzBMi5DrG-0LFI"),
            alt: "Heavy Cotton Oversized Tee",
        },
        title: "Heavy Cotton Oversized Tee",
        description: "Lifestyle wear featuring the Kalavya logo printed cleanly on premium heavy cotton apparel.",
        overlay: Some(LOGO_PRIMARY),
    },
    MockupSpec {
        image: ImageAsset {
            source: AssetSource::Remote("https://lh3.googleusercontent.com/aida-public/AB6AXuAzbx_Y4vzlUU7kjnRqR95hM2vPGqXGufauaUPsWIQBuXG3AoNeSq2e73VyIuRM6musl3WKFhvDxyQnD8pddt9LdBSX8daPK9Pw0zKTOskatzE9BXPOQJJ342QINU3fkslybU_eTUoW8iOlCKZddSwsQfGl6nswiYf_q9iktC3bA8V00k6Y9i2QfzHwP4T0FE95c0x03JrIK3tggkZQEJGWXrHkv0MAHzXDLuqDhq-6lXBDZxt_DqgARj-1HRUJp5bORUY2n8mQHfg"),
            alt: "Artisanal Canvas Tote",
        },
        title: "Artisanal Canvas Tote",
        description: "Everyday sustainable accessories blending geometric Mithila patterns with minimalist branding.",
        overlay: Some(LOGO_PRIMARY),
    },
    MockupSpec {
        image: ImageAsset {
            source: AssetSource::Remote("https://lh3.googleusercontent.com/aida-public/AB6AXuCZXIcY6JOvCF8-odhBCymXOy3IVUxX3lOUS043pJUgDsEbcAy-fAW44x8q6RqPLSFDoOBwe7_oIT69tB_aPGEl88FjFNue3j4_j48MTVy42aVN35H_hTDIuqpP5skHmGN0MEQymJmZvrAOrxbETlY4lR7ZZU-ii2EyMUbXgnSyzxQID6994wy2E6sIy4LW6nldLq_0zqKunqPkCFTConB2aRJjQlvT73Th-T6_xcHEF5WcoeOzr0tgZUtUwvJ1Qi2T988lRmQfNzs"),
            alt: "Metropolitan Banner",
        },
        title: "Metropolitan Banner",
        description: "Out of home promotional signage utilizing brand colors to draw attention gracefully in urban environments.",
        overlay: Some(LOGO_PRIMARY),
    },
    MockupSpec {
        image: ImageAsset {
            source: AssetSource::Remote("https://lh3.googleusercontent.com/aida-public/AB6AXuCkydh3-25K2t1Nr8cbBk28zB2iPkxBpwY7WbivNHri97XNXyD1j_mGh4uIHfRMhjo8PDdZo99HdPx3eOzlwLVkt7PWOc3B_EW6zB_SZKLqKTtEzh0O8OmGmBmrhRXxpK5zploOuV_R5jBwLKV8fyJpx1jXZbZtDPz5NUB6-XKSao87snXvg12YcIP0T4R25ieiB1vjusqtfkhVK7vh1FmQUFRltu8tA5hOmFIpc5Y0uTDZZ3is9VuURivZCk5hreT_P3S9kCwBuew"),
            alt: "Landing Page Design",
        },
        title: "Landing Page Design",
        description: "Hero section for the web presence, showing the logo lockups effectively framing the digital narrative.",
        overlay: None,
    },
    MockupSpec {
        image: ImageAsset {
            source: AssetSource::Remote("https://lh3.googleusercontent.com/aida-public/AB6AXuAoU4xqYczAk5Vo0O64SkIOFlR0i2OAyagHwimznfYHremC3mgklDeTDx8i0gPXrU6N9Y00V4myUB0ZyxpPfKHLfn-bfpBWjnqHDNbSg2NVkjSOD3rZL-xJOZ8VoCCV_-njdU9Ra3YNCfIxAEXaflmswoanZ59J8OlqNWVkbQigZNNZU70OtAGOW3ajMfwe7HvI00GoGt-2leZbGh6mWRr6hXF2nQRN9dkjzgi6lf9IzI4e5iwoK-iTAgAP3nmSDo1LZK42A93u9Tg"),
            alt: "Instagram Presence",
        },
        title: "Instagram Presence",
        description: "Social media grid layout maintaining the balance between traditional imagery and modern whitespace.",
        overlay: Some(LOGO_PRIMARY),
    },
];

pub const FOOTER_TAGLINE: &str = "Internal Brand Document";
pub const FOOTER_COPYRIGHT: &str = "© 2023 Kalavya.Co. Confidential.";
pub const FOOTER_UPDATED: &str = "Last Updated: October 2023";
