use anyhow::Result;

use crate::collection::{CyclicSelector, OrderedList};
use crate::color::ColorValue;
use crate::config::AppConfig;
use crate::error::Error;
use crate::format::Format;
use crate::shade;
use crate::store::{PersistentBinding, Store};

const COLORS: PersistentBinding<OrderedList<String>> = PersistentBinding::new("colors");
const SHADES: PersistentBinding<OrderedList<f64>> = PersistentBinding::new("shades");
const BACKGROUND: PersistentBinding<String> = PersistentBinding::new("backgroundColor");
const FORMAT: PersistentBinding<Format> = PersistentBinding::new("format");
const SWAP_COLORS: PersistentBinding<bool> = PersistentBinding::new("swap-colors");

pub const DEFAULT_COLORS: [&str; 3] = ["#0ea5e9", "#8b5cf6", "#f43f5e"];
pub const DEFAULT_SHADES: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];
pub const DEFAULT_BACKGROUND: &str = "white";

/// The durable palette state: everything here is mirrored into the store;
/// the derived table never is.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    pub colors: OrderedList<String>,
    pub shades: OrderedList<f64>,
    pub background: String,
    pub format: Format,
    pub swap_colors: bool,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .into(),
            shades: DEFAULT_SHADES.to_vec().into(),
            background: DEFAULT_BACKGROUND.to_string(),
            format: Format::Hex,
            swap_colors: false,
        }
    }
}

impl PaletteState {
    /// Restore prior state, falling back per key to built-in defaults when
    /// a value is missing or undecodable.
    fn restore(store: &Store) -> Self {
        let defaults = Self::default();
        Self {
            colors: COLORS.load(store).unwrap_or(defaults.colors),
            shades: SHADES.load(store).unwrap_or(defaults.shades),
            background: BACKGROUND.load(store).unwrap_or(defaults.background),
            format: FORMAT.load(store).unwrap_or(defaults.format),
            swap_colors: SWAP_COLORS.load(store).unwrap_or(defaults.swap_colors),
        }
    }

    /// Write the settled state back. Each binding is best-effort: a failed
    /// save never blocks the interaction.
    fn persist(&self, store: &Store) {
        COLORS.save(store, &self.colors);
        SHADES.save(store, &self.shades);
        BACKGROUND.save(store, &self.background);
        FORMAT.save(store, &self.format);
        SWAP_COLORS.save(store, &self.swap_colors);
    }

    pub fn format_selector(&self) -> CyclicSelector<Format> {
        CyclicSelector::starting_at(Format::ALL.to_vec(), &self.format)
            .expect("format candidates are non-empty")
    }
}

/// One palette column: a parsed base color and its shaded cells, one per
/// shade row.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteColumn {
    pub base: ColorValue,
    pub cells: Vec<ColorValue>,
}

/// The derived color matrix, indexed `[column][row]`.
///
/// A pure projection of (colors, shades): recomputed in full on demand
/// and never persisted. Small bounded inputs make memoization pointless.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteTable {
    columns: Vec<PaletteColumn>,
}

impl PaletteTable {
    pub fn derive(colors: &OrderedList<String>, shades: &OrderedList<f64>) -> Result<Self, Error> {
        let mut columns = Vec::with_capacity(colors.len());
        for literal in colors.iter() {
            let base = ColorValue::parse(literal)?;
            let cells = shades.iter().map(|p| shade::shade(&base, *p)).collect();
            columns.push(PaletteColumn { base, cells });
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[PaletteColumn] {
        &self.columns
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&ColorValue> {
        self.columns.get(column)?.cells.get(row)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Everything a render surface needs for one frame: the settled state,
/// the derived table, and the parsed background.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSnapshot {
    pub state: PaletteState,
    pub table: PaletteTable,
    pub background: ColorValue,
}

/// Service facade over the palette state: restores on read, applies one
/// transition per user action, and writes back once the state settles.
#[derive(Debug, Clone)]
pub struct PaletteService {
    config: AppConfig,
}

impl PaletteService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Store::initialize(&config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn load(&self) -> Result<PaletteState> {
        let store = self.open_store()?;
        Ok(PaletteState::restore(&store))
    }

    pub fn snapshot(&self) -> Result<PaletteSnapshot> {
        let state = self.load()?;
        let table = PaletteTable::derive(&state.colors, &state.shades)?;
        let background = ColorValue::parse(&state.background)?;
        Ok(PaletteSnapshot {
            state,
            table,
            background,
        })
    }

    pub fn add_color(&self, literal: &str) -> Result<PaletteState> {
        ColorValue::parse(literal)?;
        let literal = literal.trim().to_string();
        self.transition(|state| {
            Ok(PaletteState {
                colors: state.colors.append(literal),
                ..state
            })
        })
    }

    pub fn replace_color(&self, index: usize, literal: &str) -> Result<PaletteState> {
        ColorValue::parse(literal)?;
        let literal = literal.trim().to_string();
        self.transition(|state| {
            Ok(PaletteState {
                colors: state.colors.replace_at(index, literal)?,
                ..state
            })
        })
    }

    pub fn remove_color(&self, index: usize) -> Result<PaletteState> {
        self.transition(|state| {
            Ok(PaletteState {
                colors: state.colors.remove_at(index)?,
                ..state
            })
        })
    }

    pub fn add_shade(&self, percent: f64) -> Result<PaletteState> {
        Self::check_shade(percent)?;
        self.transition(|state| {
            Ok(PaletteState {
                shades: state.shades.append(percent),
                ..state
            })
        })
    }

    pub fn replace_shade(&self, index: usize, percent: f64) -> Result<PaletteState> {
        Self::check_shade(percent)?;
        self.transition(|state| {
            Ok(PaletteState {
                shades: state.shades.replace_at(index, percent)?,
                ..state
            })
        })
    }

    pub fn remove_shade(&self, index: usize) -> Result<PaletteState> {
        self.transition(|state| {
            Ok(PaletteState {
                shades: state.shades.remove_at(index)?,
                ..state
            })
        })
    }

    pub fn set_background(&self, literal: &str) -> Result<PaletteState> {
        ColorValue::parse(literal)?;
        let literal = literal.trim().to_string();
        self.transition(|state| {
            Ok(PaletteState {
                background: literal,
                ..state
            })
        })
    }

    pub fn set_format(&self, format: Format) -> Result<PaletteState> {
        self.transition(|state| Ok(PaletteState { format, ..state }))
    }

    pub fn cycle_format(&self) -> Result<PaletteState> {
        self.transition(|state| {
            let format = *state.format_selector().advance().active();
            Ok(PaletteState { format, ..state })
        })
    }

    pub fn toggle_swap(&self) -> Result<PaletteState> {
        self.transition(|state| {
            Ok(PaletteState {
                swap_colors: !state.swap_colors,
                ..state
            })
        })
    }

    /// Infinities and NaN have no defined shade, and serde_json could not
    /// persist them anyway.
    fn check_shade(percent: f64) -> Result<(), Error> {
        if percent.is_finite() {
            Ok(())
        } else {
            Err(Error::NonFiniteShade {
                value: percent.to_string(),
            })
        }
    }

    fn transition(
        &self,
        apply: impl FnOnce(PaletteState) -> Result<PaletteState>,
    ) -> Result<PaletteState> {
        let store = self.open_store()?;
        let state = PaletteState::restore(&store);
        let next = apply(state)?;
        next.persist(&store);
        Ok(next)
    }

    fn open_store(&self) -> Result<Store> {
        Store::initialize(&self.config)
    }
}
