use dicom_core::{Tag, VR};
use dicom_dictionary_std::tags;
use dicom_object::InMemDicomObject;
use std::collections::BTreeMap;

/// Textual metadata of a DICOM object, keyed by `"gggg|eeee"`
pub type Metadata = BTreeMap<String, String>;

// Image Plane Tags
pub const IMAGE_POSITION_PATIENT: Tag = tags::IMAGE_POSITION_PATIENT;

// Pixel Tags
pub const PIXEL_DATA: Tag = tags::PIXEL_DATA;

/// Metadata key of the Image Position (Patient) tag
pub const IMAGE_POSITION_KEY: &str = "0020|0032";

/// Formats a tag as a metadata key, e.g. `0020|0032`
pub fn tag_key(tag: Tag) -> String {
    format!("{:04x}|{:04x}", tag.group(), tag.element())
}

/// Collects every textual element of a DICOM data set
///
/// Multi-valued elements are joined with a backslash. Pixel data and
/// sequences are left out, as is anything that cannot be rendered as a
/// string.
pub fn collect_metadata(dcm: &InMemDicomObject) -> Metadata {
    dcm.iter()
        .filter(|elem| {
            let header = elem.header();
            header.tag != PIXEL_DATA && header.vr != VR::SQ
        })
        .filter_map(|elem| {
            elem.to_str()
                .ok()
                .map(|value| (tag_key(elem.header().tag), value.trim().to_string()))
        })
        .collect()
}
