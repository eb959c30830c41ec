use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geom::Point3;

/// Failures turning user-supplied tokens into catalog entries.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown view '{0}' (expected plane, iso-nw, iso-ne, iso-se or iso-sw)")]
    UnknownView(String),
    #[error("unknown sheet size '{0}'")]
    UnknownSheet(String),
}

/// Equipment symbol family. Unrecognized kind tokens become `Unknown`,
/// which draws no shape but still places the tag label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Tank,
    Drum,
    Pump,
    Separator,
    Mixer,
    Splitter,
    Source,
    Sink,
    Column,
    AbsorptionColumn,
    Extractor,
    Expander,
    Compressor,
    ReliefValve,
    Enlarger,
    Pfr,
    Cstr,
    Reactor,
    StraightTubeExchanger,
    UTubeExchanger,
    Heater,
    Cooler,
    Valve(ValveKind, Option<ActuatorKind>),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveKind {
    Gate,
    Globe,
    Ball,
    Butterfly,
    Needle,
    Relief,
    FourWay,
    ThreeWay,
    Check,
    StopCheck,
    PressureRegulator,
    Diaphragm,
    Plug,
}

impl ValveKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "gate" => Some(Self::Gate),
            "globe" => Some(Self::Globe),
            "ball" => Some(Self::Ball),
            "butterfly" => Some(Self::Butterfly),
            "needle" => Some(Self::Needle),
            "relief" => Some(Self::Relief),
            "four-way" => Some(Self::FourWay),
            "three-way" => Some(Self::ThreeWay),
            "check" => Some(Self::Check),
            "stop-check" => Some(Self::StopCheck),
            "pressure-regulator" => Some(Self::PressureRegulator),
            "diaphragm" => Some(Self::Diaphragm),
            "plug" => Some(Self::Plug),
            _ => None,
        }
    }

    /// Bodies without a stem never carry an actuator glyph.
    pub fn has_stem(self) -> bool {
        !matches!(
            self,
            Self::Needle
                | Self::Relief
                | Self::FourWay
                | Self::Check
                | Self::StopCheck
                | Self::PressureRegulator
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorKind {
    HandWheel,
    Diaphragm,
    Motor,
    Piston,
    Solenoid,
    Spring,
    Pilot,
}

impl ActuatorKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "hand-wheel" | "manual" => Some(Self::HandWheel),
            "diaphragm" => Some(Self::Diaphragm),
            "motor" => Some(Self::Motor),
            "piston" => Some(Self::Piston),
            "solenoid" => Some(Self::Solenoid),
            "spring" => Some(Self::Spring),
            "pilot" => Some(Self::Pilot),
            _ => None,
        }
    }
}

/// Service classification of a line, driving the repeating decoration
/// pattern drawn along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    ProcessFlow,
    PneumaticAir,
    Hydraulic,
    InertGas,
    InstrumentSignal,
    InstrumentCapillary,
    ElectricalWires,
    HeatTracing,
}

impl LineType {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "process-flow" => Some(Self::ProcessFlow),
            "pneumatic" | "air" => Some(Self::PneumaticAir),
            "hydraulic" => Some(Self::Hydraulic),
            "inert-gas" => Some(Self::InertGas),
            "instrument-signal" => Some(Self::InstrumentSignal),
            "instrument-capillary" => Some(Self::InstrumentCapillary),
            "electrical" => Some(Self::ElectricalWires),
            "heat-tracing" => Some(Self::HeatTracing),
            _ => None,
        }
    }
}

/// One piece of equipment in the 3D model. `kind`, `valve_kind` and
/// `actuator` stay as raw tokens so that files written by newer editors
/// still load; resolution happens in [`Element::symbol_kind`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub kind: String,
    #[serde(default)]
    pub valve_kind: Option<String>,
    #[serde(default)]
    pub actuator: Option<String>,
    #[serde(default)]
    pub position: Point3,
    /// Rotation about the X axis, degrees.
    #[serde(default)]
    pub rotation_x: f64,
    /// Rotation about the vertical (Y) axis, degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Rotation about the Z axis, degrees.
    #[serde(default)]
    pub rotation_z: f64,
    /// Per-element symbol scale multiplier.
    #[serde(default = "default_element_scale")]
    pub scale: f64,
    /// Local offsets of the element's nozzles, meters.
    #[serde(default)]
    pub connection_points: Vec<Point3>,
}

fn default_element_scale() -> f64 {
    1.0
}

impl Element {
    pub fn symbol_kind(&self) -> ElementKind {
        if self.kind == "valve" {
            let Some(valve) = self
                .valve_kind
                .as_deref()
                .and_then(ValveKind::from_token)
            else {
                return ElementKind::Unknown;
            };
            let actuator = self
                .actuator
                .as_deref()
                .and_then(ActuatorKind::from_token)
                .filter(|_| valve.has_stem());
            return ElementKind::Valve(valve, actuator);
        }
        match self.kind.as_str() {
            "tank" => ElementKind::Tank,
            "drum" => ElementKind::Drum,
            "pump" => ElementKind::Pump,
            "separator" => ElementKind::Separator,
            "mixer" => ElementKind::Mixer,
            "splitter" => ElementKind::Splitter,
            "source" => ElementKind::Source,
            "sink" => ElementKind::Sink,
            "column" => ElementKind::Column,
            "absorption-column" => ElementKind::AbsorptionColumn,
            "extractor" => ElementKind::Extractor,
            "expander" => ElementKind::Expander,
            "compressor" => ElementKind::Compressor,
            "relief-valve" | "psv" => ElementKind::ReliefValve,
            "enlarger" => ElementKind::Enlarger,
            "pfr" => ElementKind::Pfr,
            "cstr" => ElementKind::Cstr,
            "reactor" => ElementKind::Reactor,
            "shell-tube-exchanger" => ElementKind::StraightTubeExchanger,
            "u-tube-exchanger" => ElementKind::UTubeExchanger,
            "heater" => ElementKind::Heater,
            "cooler" => ElementKind::Cooler,
            _ => ElementKind::Unknown,
        }
    }
}

/// A routed pipe: ordered 3D segments sharing one service type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeLine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub line_type: Option<String>,
    #[serde(default)]
    pub segments: Vec<(Point3, Point3)>,
}

impl PipeLine {
    pub fn service(&self) -> Option<LineType> {
        self.line_type.as_deref().and_then(LineType::from_token)
    }
}

/// An instrument bubble on a P&ID: ISA letter code plus the tag number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    #[serde(default)]
    pub letters: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub position: Point3,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Titles {
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub drawing_no: String,
    #[serde(default)]
    pub drawn_by: String,
    #[serde(default)]
    pub checked_by: String,
    #[serde(default)]
    pub approved_by: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Revision {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub modification: String,
    #[serde(default)]
    pub reviewed_by: String,
    #[serde(default)]
    pub checked_by: String,
    #[serde(default)]
    pub approved_by: String,
}

/// The full 3D process model as produced by the surrounding editor.
/// Elements are keyed by tag; a BTreeMap keeps iteration (and therefore
/// draw order) deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessModel {
    #[serde(default)]
    pub elements: BTreeMap<String, Element>,
    #[serde(default)]
    pub lines: Vec<PipeLine>,
    #[serde(default)]
    pub instruments: BTreeMap<String, Instrument>,
    #[serde(default)]
    pub instrument_lines: Vec<PipeLine>,
    #[serde(default)]
    pub titles: Titles,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

pub fn load_model(path: &Path) -> Result<ProcessModel> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading model {}", path.display()))?;
    parse_model(&contents)
}

pub fn parse_model(contents: &str) -> Result<ProcessModel> {
    serde_json::from_str(contents).context("parsing process model")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valve(kind: &str, actuator: Option<&str>) -> Element {
        Element {
            kind: "valve".to_string(),
            valve_kind: Some(kind.to_string()),
            actuator: actuator.map(str::to_string),
            position: Point3::default(),
            rotation_x: 0.0,
            rotation: 0.0,
            rotation_z: 0.0,
            scale: 1.0,
            connection_points: Vec::new(),
        }
    }

    #[test]
    fn stemless_valves_drop_their_actuator() {
        let checked = valve("check", Some("motor"));
        assert_eq!(
            checked.symbol_kind(),
            ElementKind::Valve(ValveKind::Check, None)
        );
        let gate = valve("gate", Some("motor"));
        assert_eq!(
            gate.symbol_kind(),
            ElementKind::Valve(ValveKind::Gate, Some(ActuatorKind::Motor))
        );
    }

    #[test]
    fn unknown_tokens_degrade_to_unknown_kind() {
        let mut e = valve("gate", None);
        e.kind = "hovercraft".to_string();
        assert_eq!(e.symbol_kind(), ElementKind::Unknown);
        let v = valve("warp", None);
        assert_eq!(v.symbol_kind(), ElementKind::Unknown);
    }

    #[test]
    fn minimal_model_parses_with_defaults() {
        let model = parse_model(
            r#"{"elements": {"P-101": {"kind": "pump", "position": {"x": 1.0, "y": 0.0, "z": 2.0}}}}"#,
        )
        .unwrap();
        let pump = model.elements.get("P-101").unwrap();
        assert_eq!(pump.symbol_kind(), ElementKind::Pump);
        assert_eq!(pump.scale, 1.0);
        assert!(model.lines.is_empty());
    }
}
