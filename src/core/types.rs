use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// Module identifier written by `CollectAlignmentSummaryMetrics`
pub const ALIGNMENT_SUMMARY_MODULE: &str = "picard.analysis.CollectAlignmentSummaryMetrics";

/// Module identifier written by `MeanQualityByCycle`
pub const QUALITY_BY_CYCLE_MODULE: &str = "picard.analysis.MeanQualityByCycle";

/// The report shapes the parser understands, keyed off the module identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportVariant {
    /// Insert-size, duplication and any other module: all three sections present
    GenericMetrics,
    /// `CollectAlignmentSummaryMetrics`: metrics only
    AlignmentSummary,
    /// `MeanQualityByCycle`: arguments and histogram, no metrics
    QualityByCycle,
}

/// Which optional sections a report variant carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub arguments: bool,
    pub metrics: bool,
    pub histogram: bool,
}

impl ReportVariant {
    /// Resolve the variant from a module identifier such as
    /// `picard.analysis.CollectInsertSizeMetrics`.
    ///
    /// Unknown identifiers fall back to [`ReportVariant::GenericMetrics`].
    #[must_use]
    pub fn from_module_name(module_name: &str) -> Self {
        match module_name {
            ALIGNMENT_SUMMARY_MODULE => Self::AlignmentSummary,
            QUALITY_BY_CYCLE_MODULE => Self::QualityByCycle,
            _ => Self::GenericMetrics,
        }
    }

    /// Sections present in this variant
    #[must_use]
    pub const fn sections(self) -> Sections {
        match self {
            Self::GenericMetrics => Sections {
                arguments: true,
                metrics: true,
                histogram: true,
            },
            Self::AlignmentSummary => Sections {
                arguments: false,
                metrics: true,
                histogram: false,
            },
            Self::QualityByCycle => Sections {
                arguments: true,
                metrics: false,
                histogram: true,
            },
        }
    }
}

impl std::fmt::Display for ReportVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GenericMetrics => write!(f, "generic metrics"),
            Self::AlignmentSummary => write!(f, "alignment summary"),
            Self::QualityByCycle => write!(f, "quality by cycle"),
        }
    }
}

/// A numeric histogram token.
///
/// Tokens made only of ASCII digits are kept as exact integers; everything
/// else that parses as a floating-point literal (signs, decimal points,
/// exponents) becomes a float. Equality and hashing follow the numeric value,
/// so `Integer(28)` equals `Float(28.0)` and `Float(-0.0)` equals `Integer(0)`;
/// use [`Numeric::is_integer`] to tell how a token was written.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    Integer(u64),
    Float(f64),
}

impl Numeric {
    /// Classify a single token, returning `None` if it is not numeric.
    ///
    /// # Examples
    ///
    /// ```
    /// use picard_parser::core::types::Numeric;
    ///
    /// assert_eq!(Numeric::classify("28"), Some(Numeric::Integer(28)));
    /// assert_eq!(Numeric::classify("28.5"), Some(Numeric::Float(28.5)));
    /// assert_eq!(Numeric::classify("abc"), None);
    /// ```
    #[must_use]
    pub fn classify(token: &str) -> Option<Self> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            // Digit runs too long for u64 still count as numbers
            if let Ok(n) = token.parse::<u64>() {
                return Some(Self::Integer(n));
            }
        }
        token.parse::<f64>().ok().map(Self::Float)
    }

    /// Value as a float, for arithmetic across mixed bins
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

/// Identity of a number for equality and hashing, independent of how it was written
#[derive(PartialEq, Eq, Hash)]
enum NumericKey {
    Whole(u64),
    Bits(u64),
}

impl Numeric {
    /// Whole, non-negative floats collapse onto the integer of the same value
    /// and `-0.0` onto `0`, so `28`, `28.0` and `28e0` are one histogram bin.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
    fn key(self) -> NumericKey {
        // 2^64, the first float past u64::MAX
        const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

        match self {
            Self::Integer(n) => NumericKey::Whole(n),
            Self::Float(f) if f == 0.0 => NumericKey::Whole(0),
            Self::Float(f) if f > 0.0 && f < U64_LIMIT && f.fract() == 0.0 => {
                NumericKey::Whole(f as u64)
            }
            Self::Float(f) => NumericKey::Bits(f.to_bits()),
        }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Numeric {}

impl Hash for Numeric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing ".0" so floats stay recognisable
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => serializer.serialize_u64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
        }
    }
}
