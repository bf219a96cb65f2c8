//! Attribute inspection.
//!
//! Markers arrive from the host with whatever qualification the source
//! used, so lookups match either the simple or the fully-qualified name,
//! with and without the conventional `Attribute` suffix.

use caulk_core::config::ContractConfig;
use caulk_core::model::Marker;

fn marker_matches(marker: &Marker, name: &str) -> bool {
    if marker.name == name || marker.qualified_name == name {
        return true;
    }
    let suffixed = format!("{name}Attribute");
    if marker.name == suffixed || marker.qualified_name == suffixed {
        return true;
    }
    let dotted = format!(".{name}");
    let dotted_suffixed = format!(".{suffixed}");
    marker.qualified_name.ends_with(&dotted) || marker.qualified_name.ends_with(&dotted_suffixed)
}

/// True when any attached marker matches `name` by simple or qualified name.
pub fn has_marker(markers: &[Marker], name: &str) -> bool {
    markers.iter().any(|m| marker_matches(m, name))
}

/// True when the symbol carries the type-level contract marker or one of
/// the accepted alternatives.
pub fn has_contract_marker(markers: &[Marker], config: &ContractConfig) -> bool {
    if has_marker(markers, &config.contract_marker) {
        return true;
    }
    config
        .contract_alternatives
        .iter()
        .any(|alt| has_marker(markers, alt))
}

pub fn has_member_marker(markers: &[Marker], config: &ContractConfig) -> bool {
    has_marker(markers, &config.member_marker)
}

pub fn has_enum_marker(markers: &[Marker], config: &ContractConfig) -> bool {
    has_marker(markers, &config.enum_marker)
}

pub fn has_naming_marker(markers: &[Marker], config: &ContractConfig) -> bool {
    has_marker(markers, &config.naming_marker)
}
