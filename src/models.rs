use egui::Color32;
use serde::Deserialize;

use crate::utils::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTheme {
    Light,
    Dark,
}

/// The defect classes the detection service is trained on, plus a catch-all
/// for class strings it might start emitting that we do not know about yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DefectKind {
    MissingHole,
    MouseBite,
    OpenCircuit,
    Short,
    Spur,
    SpuriousCopper,
    Unknown(String),
}

impl From<String> for DefectKind {
    fn from(class: String) -> Self {
        match class.as_str() {
            "missing hole" => Self::MissingHole,
            "mouse bite" => Self::MouseBite,
            "open circuit" => Self::OpenCircuit,
            "short" => Self::Short,
            "spur" => Self::Spur,
            "spurious copper" => Self::SpuriousCopper,
            _ => Self::Unknown(class),
        }
    }
}

impl DefectKind {
    /// The class string as the service sent it.
    pub fn raw(&self) -> &str {
        match self {
            Self::MissingHole => "missing hole",
            Self::MouseBite => "mouse bite",
            Self::OpenCircuit => "open circuit",
            Self::Short => "short",
            Self::Spur => "spur",
            Self::SpuriousCopper => "spurious copper",
            Self::Unknown(class) => class,
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.raw())
    }

    /// Border color for the overlay rectangle. Total over every variant, so
    /// an unrecognized class still renders (in neutral gray).
    pub fn color(&self, theme: AppTheme) -> Color32 {
        match theme {
            AppTheme::Light => match self {
                Self::MissingHole => Color32::from_rgb(0x3b, 0x82, 0xf6),
                Self::MouseBite => Color32::from_rgb(0xea, 0xb3, 0x08),
                Self::OpenCircuit => Color32::from_rgb(0xa8, 0x55, 0xf7),
                Self::Short => Color32::from_rgb(0xef, 0x44, 0x44),
                Self::Spur => Color32::from_rgb(0xf9, 0x73, 0x16),
                Self::SpuriousCopper => Color32::from_rgb(0x22, 0xc5, 0x5e),
                Self::Unknown(_) => Color32::from_rgb(0x6b, 0x72, 0x80),
            },
            AppTheme::Dark => match self {
                Self::MissingHole => Color32::from_rgb(0x93, 0xc5, 0xfd),
                Self::MouseBite => Color32::from_rgb(0xfd, 0xe0, 0x47),
                Self::OpenCircuit => Color32::from_rgb(0xd8, 0xb4, 0xfe),
                Self::Short => Color32::from_rgb(0xfc, 0xa5, 0xa5),
                Self::Spur => Color32::from_rgb(0xfd, 0xba, 0x74),
                Self::SpuriousCopper => Color32::from_rgb(0x4a, 0xde, 0x80),
                Self::Unknown(_) => Color32::from_rgb(0x9c, 0xa3, 0xaf),
            },
        }
    }

    /// Suggested remediation shown in the results table.
    pub fn solution(&self) -> Option<&'static str> {
        match self {
            Self::MissingHole => Some("Ensure proper drill settings during PCB manufacturing."),
            Self::MouseBite => Some("Inspect routing paths and clean irregular edges."),
            Self::OpenCircuit => Some("Check for broken traces and solder the gaps."),
            Self::Short => Some("Remove excess solder causing shorts between traces."),
            Self::Spur => Some("Eliminate stray connections by refining etching processes."),
            Self::SpuriousCopper => Some("Remove unwanted copper patterns using fine etching tools."),
            Self::Unknown(_) => None,
        }
    }
}

/// One detection as returned by the service. `bbox` is `[x1, y1, x2, y2]` in
/// the pixel space of the original image, `score` in `[0, 1]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Detection {
    pub bbox: [f32; 4],
    pub class: DefectKind,
    pub score: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectResponse {
    #[serde(default)]
    pub results: Vec<Detection>,
}
