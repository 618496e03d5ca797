//! DICOM fixtures written on the fly for unit tests

use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::tags;
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use std::path::{Path, PathBuf};

const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";

fn write(dir: &Path, name: &str, dcm: InMemDicomObject) -> PathBuf {
    let path = dir.join(name);
    let meta = FileMetaTableBuilder::new()
        .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN)
        .media_storage_sop_class_uid(MR_IMAGE_STORAGE)
        .media_storage_sop_instance_uid(format!("1.2.826.0.1.3680043.2.1125.{}", name.len()));
    dcm.with_meta(meta).unwrap().write_to_file(&path).unwrap();
    path
}

/// Writes a 16-bit monochrome slice of `rows` x `cols` samples
///
/// `position` is stored verbatim in Image Position (Patient) when given.
pub(crate) fn write_slice(
    dir: &Path,
    name: &str,
    rows: u16,
    cols: u16,
    pixels: &[u16],
    position: Option<&str>,
) -> PathBuf {
    assert_eq!(pixels.len(), rows as usize * cols as usize);

    let mut dcm = InMemDicomObject::new_empty();
    dcm.put(DataElement::new(
        tags::SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(MR_IMAGE_STORAGE),
    ));
    dcm.put(DataElement::new(
        tags::MODALITY,
        VR::CS,
        PrimitiveValue::from("MR"),
    ));
    if let Some(position) = position {
        dcm.put(DataElement::new(
            tags::IMAGE_POSITION_PATIENT,
            VR::DS,
            PrimitiveValue::from(position),
        ));
    }
    dcm.put(DataElement::new(
        tags::SAMPLES_PER_PIXEL,
        VR::US,
        PrimitiveValue::from(1_u16),
    ));
    dcm.put(DataElement::new(
        tags::PHOTOMETRIC_INTERPRETATION,
        VR::CS,
        PrimitiveValue::from("MONOCHROME2"),
    ));
    dcm.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(rows)));
    dcm.put(DataElement::new(
        tags::COLUMNS,
        VR::US,
        PrimitiveValue::from(cols),
    ));
    dcm.put(DataElement::new(
        tags::BITS_ALLOCATED,
        VR::US,
        PrimitiveValue::from(16_u16),
    ));
    dcm.put(DataElement::new(
        tags::BITS_STORED,
        VR::US,
        PrimitiveValue::from(16_u16),
    ));
    dcm.put(DataElement::new(
        tags::HIGH_BIT,
        VR::US,
        PrimitiveValue::from(15_u16),
    ));
    dcm.put(DataElement::new(
        tags::PIXEL_REPRESENTATION,
        VR::US,
        PrimitiveValue::from(0_u16),
    ));
    dcm.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OW,
        PrimitiveValue::U16(pixels.to_vec().into()),
    ));

    write(dir, name, dcm)
}

/// Writes a 4x4 gradient slice at the given position
pub(crate) fn write_gradient(dir: &Path, name: &str, position: &str, offset: u16) -> PathBuf {
    let pixels: Vec<u16> = (0..16).map(|v| v * 10 + offset).collect();
    write_slice(dir, name, 4, 4, &pixels, Some(position))
}

/// Writes a file whose data set holds nothing but pixel data
pub(crate) fn write_pixel_only_file(dir: &Path, name: &str) -> PathBuf {
    let mut dcm = InMemDicomObject::new_empty();
    dcm.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OW,
        PrimitiveValue::U16(vec![0_u16; 4].into()),
    ));
    write(dir, name, dcm)
}
