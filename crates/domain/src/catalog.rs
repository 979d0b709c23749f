//! Static lookup tables for agent-reported identifiers.
//!
//! Agents report the build-system model tag and the raw SD card-register
//! manufacturer id; the dashboard wants marketing names. Unknown values
//! pass through unchanged rather than failing the report.

/// Map an Android build model tag to its marketing name.
#[must_use]
pub fn marketing_name(model_tag: &str) -> Option<&'static str> {
    let name = match model_tag {
        "cheetah" => "Pixel 7 Pro",
        "panther" => "Pixel 7",
        "lynx" => "Pixel 7a",
        "raven" => "Pixel 6 Pro",
        "oriole" => "Pixel 6",
        "bluejay" => "Pixel 6a",
        "dm3q" => "Galaxy S23 Ultra",
        "dm1q" => "Galaxy S23",
        "b0q" => "Galaxy S22 Ultra",
        "g0q" => "Galaxy S22+",
        "r0q" => "Galaxy S22",
        "beyond1" => "Galaxy S10",
        "a52sxq" => "Galaxy A52s",
        "alioth" => "Poco F3",
        "munch" => "Poco F4",
        "spes" => "Redmi Note 11",
        "veux" => "Redmi Note 11 Pro",
        _ => return None,
    };
    Some(name)
}

/// Map an SD card-register manufacturer id to a company name.
///
/// Ids follow the SD Association MID register, reported by agents as
/// zero-padded hex strings.
#[must_use]
pub fn sd_manufacturer_name(manufacturer_id: &str) -> Option<&'static str> {
    let name = match manufacturer_id {
        "0x000001" => "Panasonic",
        "0x000002" => "Toshiba",
        "0x000003" => "SanDisk",
        "0x00001b" => "Samsung",
        "0x00001d" => "ADATA",
        "0x000027" => "Phison",
        "0x000028" => "Lexar",
        "0x000041" => "Kingston",
        "0x000074" => "Transcend",
        "0x000082" => "Sony",
        "0x00009c" => "Angelbird",
        _ => return None,
    };
    Some(name)
}

/// Resolve the display form of a model tag, keeping unknown tags as-is.
#[must_use]
pub fn display_model_tag(model_tag: &str) -> String {
    marketing_name(model_tag)
        .map(str::to_string)
        .unwrap_or_else(|| model_tag.to_string())
}

/// Resolve the display form of an SD manufacturer id, keeping unknown ids.
#[must_use]
pub fn display_sd_manufacturer(manufacturer_id: &str) -> String {
    sd_manufacturer_name(manufacturer_id)
        .map(str::to_string)
        .unwrap_or_else(|| manufacturer_id.to_string())
}
