//! The formation catalog.
//!
//! Every formation is one pure [`Placement`] function registered against a
//! [`FormationId`]. A placement sees only its [`Slot`] (index, swarm size and
//! scale) plus a random source, and returns a point in the formation's local
//! frame; [`generate_targets`] then translates the whole shape to the anchor.
//!
//! Index-to-feature assignment depends on the swarm size, so callers must
//! regenerate every target whenever the size changes rather than patching the
//! tail of the previous sequence.

use glam::Vec3;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;

mod artistic;
mod basic;
pub mod geometry;
mod glyphs;
mod heritage;
mod nature;
mod objects;
pub mod segments;
mod shows;
mod solids;
mod symbols;

/// One drone's seat in a formation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub count: usize,
    pub scale: f32,
}

impl Slot {
    pub fn new(index: usize, count: usize, scale: f32) -> Self {
        Self {
            index,
            count,
            scale,
        }
    }

    /// `index / count`, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        geometry::progress(self.index, self.count)
    }

    pub fn split(&self, bounds: &[f64]) -> segments::Part {
        segments::split(self.index, self.count, bounds)
    }
}

/// Computes one drone's target in the formation's local frame.
pub type Placement = fn(&Slot, &mut dyn RngCore) -> Vec3;

/// How a placement derives its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormationKind {
    /// A closed-form function of `(index, count, scale)`.
    ClosedForm,
    /// The index range is split into fixed fractions, each with its own shape.
    Segmented,
    /// Includes uniform random jitter; repeated calls differ.
    Stochastic,
}

impl FormationKind {
    pub fn is_deterministic(self) -> bool {
        !matches!(self, FormationKind::Stochastic)
    }
}

/// A registered formation: its kind and its placement function.
#[derive(Clone, Copy)]
pub struct Blueprint {
    pub kind: FormationKind,
    pub place: Placement,
}

impl fmt::Debug for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blueprint").field("kind", &self.kind).finish()
    }
}

macro_rules! catalog {
    ($($(#[$attr:meta])* $variant:ident => $name:literal, $kind:ident, $place:path;)+) => {
        /// Every formation the catalog can generate.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum FormationId {
            $($(#[$attr])* $variant,)+
        }

        impl FormationId {
            pub const ALL: &'static [FormationId] = &[$(FormationId::$variant,)+];

            /// The snake_case name used by hosts and settings files.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(FormationId::$variant => $name,)+
                }
            }

            pub fn blueprint(self) -> Blueprint {
                match self {
                    $(FormationId::$variant => Blueprint {
                        kind: FormationKind::$kind,
                        place: $place,
                    },)+
                }
            }
        }
    };
}

catalog! {
    // Basic shapes
    Line => "line", ClosedForm, basic::line;
    Circle => "circle", ClosedForm, basic::circle;
    Square => "square", ClosedForm, basic::square;
    Triangle => "triangle", ClosedForm, basic::triangle;
    Rectangle => "rectangle", ClosedForm, basic::rectangle;
    Pentagon => "pentagon", ClosedForm, basic::pentagon;
    Hexagon => "hexagon", ClosedForm, basic::hexagon;
    // Symbols
    Heart => "heart", ClosedForm, symbols::heart;
    Star => "star", ClosedForm, symbols::star;
    Diamond => "diamond", ClosedForm, symbols::diamond;
    Arrow => "arrow", Segmented, symbols::arrow;
    Cross => "cross", Segmented, symbols::cross;
    Smiley => "smiley", Segmented, symbols::smiley;
    Peace => "peace", Segmented, symbols::peace;
    Infinity => "infinity", ClosedForm, symbols::infinity;
    // Heritage
    #[default]
    IndianFlag => "indian_flag", Segmented, heritage::indian_flag;
    AshokaChakra => "ashoka_chakra", Segmented, heritage::ashoka_chakra;
    Peacock => "peacock", Segmented, heritage::peacock;
    Lotus => "lotus", Segmented, heritage::lotus;
    Elephant => "elephant", Segmented, heritage::elephant;
    TajMahal => "taj_mahal", Segmented, heritage::taj_mahal;
    // Animals and nature
    Butterfly => "butterfly", ClosedForm, nature::butterfly;
    Bird => "bird", Segmented, nature::bird;
    Eagle => "eagle", Segmented, nature::eagle;
    Flower => "flower", Segmented, nature::flower;
    Tree => "tree", Segmented, nature::tree;
    Sun => "sun", Segmented, nature::sun;
    Moon => "moon", Segmented, nature::moon;
    Cloud => "cloud", Stochastic, nature::cloud;
    // Numbers and letters
    Number0 => "number_0", ClosedForm, glyphs::number_0;
    Number1 => "number_1", Segmented, glyphs::number_1;
    Number2 => "number_2", Segmented, glyphs::number_2;
    LetterA => "letter_a", Segmented, glyphs::letter_a;
    LetterI => "letter_i", Segmented, glyphs::letter_i;
    LetterLove => "letter_love", Segmented, glyphs::letter_love;
    // Objects
    Airplane => "airplane", Segmented, objects::airplane;
    Rocket => "rocket", Segmented, objects::rocket;
    Globe => "globe", Segmented, objects::globe;
    Phone => "phone", Segmented, objects::phone;
    Laptop => "laptop", Segmented, objects::laptop;
    Car => "car", Segmented, objects::car;
    House => "house", Segmented, objects::house;
    // 3D and dynamic
    Spiral => "spiral", ClosedForm, solids::spiral;
    Helix => "helix", ClosedForm, solids::helix;
    Wave => "wave", ClosedForm, solids::wave;
    Sphere => "sphere", ClosedForm, solids::sphere;
    Cylinder => "cylinder", ClosedForm, solids::cylinder;
    Cone => "cone", ClosedForm, solids::cone;
    Figure8 => "figure8", ClosedForm, solids::figure8;
    Pyramid => "pyramid", Segmented, solids::pyramid;
    Dna => "dna", Segmented, solids::dna;
    // Shows
    Fireworks => "fireworks", Stochastic, shows::fireworks;
    ChristmasTree => "christmas_tree", Segmented, shows::christmas_tree;
    Snowflake => "snowflake", Segmented, shows::snowflake;
    OlympicRings => "olympic_rings", Segmented, shows::olympic_rings;
    Crown => "crown", Segmented, shows::crown;
    Trophy => "trophy", Segmented, shows::trophy;
    // Abstract
    Random => "random", Stochastic, artistic::random;
    Galaxy => "galaxy", Stochastic, artistic::galaxy;
    Mandala => "mandala", Segmented, artistic::mandala;
    YinYang => "yin_yang", Segmented, artistic::yin_yang;
    Rose => "rose", ClosedForm, artistic::rose;
    MusicalNote => "musical_note", Segmented, artistic::musical_note;
}

impl FormationId {
    pub fn kind(self) -> FormationKind {
        self.blueprint().kind
    }

    pub fn placement(self) -> Placement {
        self.blueprint().place
    }
}

impl fmt::Display for FormationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a formation name is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormationError {
    pub name: String,
}

impl fmt::Display for ParseFormationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown formation '{}'", self.name)
    }
}

impl std::error::Error for ParseFormationError {}

impl FromStr for FormationId {
    type Err = ParseFormationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FormationId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseFormationError {
                name: name.to_string(),
            })
    }
}

/// Negative or non-finite scales collapse the shape to the anchor.
pub fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        0.0
    }
}

/// Compute one target per drone for `id`, translated by `anchor`.
///
/// The result has exactly `count` entries; a count of zero yields no targets.
/// Deterministic formations return identical output for identical input, and
/// generating at an anchor equals generating at the origin then adding it.
pub fn generate_targets(
    id: FormationId,
    count: usize,
    scale: f32,
    anchor: Vec3,
    rng: &mut dyn RngCore,
) -> Vec<Vec3> {
    let scale = sanitize_scale(scale);
    let place = id.placement();
    let mut targets = Vec::with_capacity(count);
    for index in 0..count {
        targets.push(place(&Slot::new(index, count, scale), rng) + anchor);
    }
    targets
}

/// Like [`generate_targets`], looking the formation up by name.
///
/// Unknown names yield an empty sequence; callers keep their previous targets.
pub fn generate_targets_by_name(
    name: &str,
    count: usize,
    scale: f32,
    anchor: Vec3,
    rng: &mut dyn RngCore,
) -> Vec<Vec3> {
    match name.parse::<FormationId>() {
        Ok(id) => generate_targets(id, count, scale, anchor, rng),
        Err(_) => Vec::new(),
    }
}
