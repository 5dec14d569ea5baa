//! Drug-label sections distilled from openFDA responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalogue of label sections the care-plan form knows how to render.
///
/// The variant order is the presentation order; a transformed label emits
/// its sections in this order, skipping any the response lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSectionKind {
    /// Brand name.
    BrandName,
    /// Generic name.
    GenericName,
    /// Indications and usage.
    Indications,
    /// Dosage and administration.
    Dosage,
    /// General warnings.
    Warnings,
    /// Boxed warning.
    BoxedWarning,
    /// Precautions.
    Precautions,
    /// Contraindications.
    Contraindications,
    /// Adverse reactions.
    AdverseReactions,
    /// Drug interactions.
    Interactions,
    /// Overdosage.
    Overdosage,
    /// Product description.
    Description,
    /// Clinical pharmacology.
    Pharmacology,
    /// Mechanism of action.
    Mechanism,
    /// Pharmacokinetics.
    Pharmacokinetics,
    /// Storage and handling.
    Storage,
    /// Information for patients.
    PatientInfo,
    /// References.
    References,
}

impl LabelSectionKind {
    /// Every section kind in presentation order.
    pub const ALL: [Self; 18] = [
        Self::BrandName,
        Self::GenericName,
        Self::Indications,
        Self::Dosage,
        Self::Warnings,
        Self::BoxedWarning,
        Self::Precautions,
        Self::Contraindications,
        Self::AdverseReactions,
        Self::Interactions,
        Self::Overdosage,
        Self::Description,
        Self::Pharmacology,
        Self::Mechanism,
        Self::Pharmacokinetics,
        Self::Storage,
        Self::PatientInfo,
        Self::References,
    ];

    /// Stable section identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BrandName => "brand_name",
            Self::GenericName => "generic_name",
            Self::Indications => "indications",
            Self::Dosage => "dosage",
            Self::Warnings => "warnings",
            Self::BoxedWarning => "boxed_warning",
            Self::Precautions => "precautions",
            Self::Contraindications => "contraindications",
            Self::AdverseReactions => "adverse_reactions",
            Self::Interactions => "interactions",
            Self::Overdosage => "overdosage",
            Self::Description => "description",
            Self::Pharmacology => "pharmacology",
            Self::Mechanism => "mechanism",
            Self::Pharmacokinetics => "pharmacokinetics",
            Self::Storage => "storage",
            Self::PatientInfo => "patient_info",
            Self::References => "references",
        }
    }

    /// Heading shown above the section.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BrandName => "Brand Name",
            Self::GenericName => "Generic Name",
            Self::Indications => "Indications and Usage",
            Self::Dosage => "Dosage and Administration",
            Self::Warnings => "Warnings",
            Self::BoxedWarning => "Boxed Warning",
            Self::Precautions => "Precautions",
            Self::Contraindications => "Contraindications",
            Self::AdverseReactions => "Adverse Reactions",
            Self::Interactions => "Drug Interactions",
            Self::Overdosage => "Overdosage",
            Self::Description => "Description",
            Self::Pharmacology => "Clinical Pharmacology",
            Self::Mechanism => "Mechanism of Action",
            Self::Pharmacokinetics => "Pharmacokinetics",
            Self::Storage => "Storage and Handling",
            Self::PatientInfo => "Information for Patients",
            Self::References => "References",
        }
    }

    /// Whether the section renders with warning styling.
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(
            self,
            Self::Warnings
                | Self::BoxedWarning
                | Self::Precautions
                | Self::Contraindications
                | Self::AdverseReactions
        )
    }
}

impl fmt::Display for LabelSectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One renderable section of a transformed drug label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSection {
    /// Which catalogue section this is.
    pub kind: LabelSectionKind,
    /// Heading shown above the body.
    pub title: String,
    /// Section body as markdown.
    pub markdown: String,
    /// Whether the section renders with warning styling.
    pub is_warning: bool,
}

impl LabelSection {
    /// Builds a section of the given kind around a markdown body.
    #[must_use]
    pub fn new(kind: LabelSectionKind, markdown: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_owned(),
            markdown: markdown.into(),
            is_warning: kind.is_warning(),
        }
    }
}
