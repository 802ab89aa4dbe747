//! Element kinds and kind-specific configuration
//!
//! This module defines the closed set of component kinds that can be placed
//! on the designer canvas, together with the palette defaults (size, name,
//! configuration) used when the host drops a new element.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use wasm_bindgen::prelude::*;

use super::core::Size;

/// Enumeration of all component kinds that can be placed on the canvas
///
/// The numeric value is the wire representation: the host passes it when
/// adding elements and it is what design JSON stores.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Clickable button with a text label
    Button = 1,

    /// Static text block
    Text = 2,

    /// Single- or multi-line text input field
    Input = 3,

    /// Image placeholder rendered from a source URL
    Image = 4,

    /// Interactive map view with region-selection support
    MapView = 5,
}

impl ElementKind {
    /// Human-readable label, used for default element names and the
    /// undo/redo descriptions shown in the host's toolbar
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Button => "Button",
            ElementKind::Text => "Text",
            ElementKind::Input => "Input",
            ElementKind::Image => "Image",
            ElementKind::MapView => "Map view",
        }
    }

    /// Canvas size a freshly placed element of this kind starts with
    pub fn default_size(&self) -> Size {
        match self {
            ElementKind::Button => Size::new(120.0, 40.0),
            ElementKind::Text => Size::new(200.0, 24.0),
            ElementKind::Input => Size::new(200.0, 32.0),
            ElementKind::Image => Size::new(160.0, 120.0),
            ElementKind::MapView => Size::new(320.0, 240.0),
        }
    }

    /// Configuration a freshly placed element of this kind starts with
    pub fn default_config(&self) -> ElementConfig {
        match self {
            ElementKind::Button => ElementConfig::Button(ButtonConfig::default()),
            ElementKind::Text => ElementConfig::Text(TextConfig::default()),
            ElementKind::Input => ElementConfig::Input(InputConfig::default()),
            ElementKind::Image => ElementConfig::Image(ImageConfig::default()),
            ElementKind::MapView => ElementConfig::MapView(MapConfig::default()),
        }
    }
}

/// Kind-specific configuration payload of a placed element
///
/// Opaque to the undo machinery: commands carry it verbatim and never look
/// inside. Edits to it arrive as whole-element updates from the host's
/// property panel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ElementConfig {
    Button(ButtonConfig),
    Text(TextConfig),
    Input(InputConfig),
    Image(ImageConfig),
    MapView(MapConfig),
}

/// Visual weight of a button
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Danger,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ButtonConfig {
    /// Text rendered on the button face
    pub label: String,
    pub style: ButtonStyle,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: "Button".to_string(),
            style: ButtonStyle::Primary,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextConfig {
    pub content: String,
    pub font_size: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            content: "Text".to_string(),
            font_size: 14.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct InputConfig {
    /// Placeholder shown while the field is empty
    pub placeholder: String,
    pub multiline: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ImageConfig {
    /// Source URL; empty renders the host's placeholder art
    pub source: String,
    /// Alternative text for accessibility
    pub alt_text: String,
}

/// How the map reacts to the viewer clicking regions
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MapSelectionMode {
    /// Viewing only, clicks do nothing
    Disabled,
    /// One region selected at a time
    #[default]
    Single,
    /// Any number of regions selected together
    Multiple,
}

/// Map-view configuration, including the region-selection behavior
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub selection_mode: MapSelectionMode,
    /// Layer names the viewer may select regions from; empty means all
    pub selectable_layers: Vec<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 0.0,
            center_lon: 0.0,
            zoom: 2,
            selection_mode: MapSelectionMode::Single,
            selectable_layers: Vec::new(),
        }
    }
}
