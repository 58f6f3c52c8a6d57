//! The embedded standard data element dictionary.
//!
//! Sourced from the DICOM PS3.6 data element registry. This is a curated
//! subset spanning the attributes most commonly seen in real files
//! (identification, patient, study/series, equipment, image, SOP common,
//! and file meta groups) rather than a full transcription of the ~5,256-row
//! registry.

use dcmpeek_core::{Tag, VR};

/// One row of the standard dictionary.
///
/// `vm` and `retired` are part of the PS3.6 registry schema and are kept on
/// each row even though the public API only exposes `name`/`vr`/`keyword`
/// lookups today.
#[allow(dead_code)]
pub struct Entry {
    pub tag: Tag,
    pub keyword: &'static str,
    pub name: &'static str,
    pub vr: VR,
    pub vm: &'static str,
    pub retired: bool,
}

macro_rules! e {
    ($g:expr, $e:expr, $kw:expr, $name:expr, $vr:ident, $vm:expr) => {
        Entry {
            tag: Tag($g, $e),
            keyword: $kw,
            name: $name,
            vr: VR::$vr,
            vm: $vm,
            retired: false,
        }
    };
    ($g:expr, $e:expr, $kw:expr, $name:expr, $vr:ident, $vm:expr, retired) => {
        Entry {
            tag: Tag($g, $e),
            keyword: $kw,
            name: $name,
            vr: VR::$vr,
            vm: $vm,
            retired: true,
        }
    };
}

pub static ENTRIES: &[Entry] = &[
    // -- File Meta Information (0002,xxxx) --
    e!(0x0002, 0x0000, "FileMetaInformationGroupLength", "File Meta Information Group Length", UL, "1"),
    e!(0x0002, 0x0001, "FileMetaInformationVersion", "File Meta Information Version", OB, "1"),
    e!(0x0002, 0x0002, "MediaStorageSOPClassUID", "Media Storage SOP Class UID", UI, "1"),
    e!(0x0002, 0x0003, "MediaStorageSOPInstanceUID", "Media Storage SOP Instance UID", UI, "1"),
    e!(0x0002, 0x0010, "TransferSyntaxUID", "Transfer Syntax UID", UI, "1"),
    e!(0x0002, 0x0012, "ImplementationClassUID", "Implementation Class UID", UI, "1"),
    e!(0x0002, 0x0013, "ImplementationVersionName", "Implementation Version Name", SH, "1"),
    e!(0x0002, 0x0016, "SourceApplicationEntityTitle", "Source Application Entity Title", AE, "1"),
    e!(0x0002, 0x0017, "SendingApplicationEntityTitle", "Sending Application Entity Title", AE, "1"),
    e!(0x0002, 0x0018, "ReceivingApplicationEntityTitle", "Receiving Application Entity Title", AE, "1"),
    e!(0x0002, 0x0100, "PrivateInformationCreatorUID", "Private Information Creator UID", UI, "1"),
    e!(0x0002, 0x0102, "PrivateInformation", "Private Information", OB, "1"),

    // -- Identification / SOP Common (0008,xxxx) --
    e!(0x0008, 0x0000, "IdentifyingGroupLength", "Identifying Group Length", UL, "1", retired),
    e!(0x0008, 0x0001, "LengthToEnd", "Length to End", UL, "1", retired),
    e!(0x0008, 0x0005, "SpecificCharacterSet", "Specific Character Set", CS, "1-n"),
    e!(0x0008, 0x0006, "LanguageCodeSequence", "Language Code Sequence", SQ, "1"),
    e!(0x0008, 0x0008, "ImageType", "Image Type", CS, "2-n"),
    e!(0x0008, 0x0012, "InstanceCreationDate", "Instance Creation Date", DA, "1"),
    e!(0x0008, 0x0013, "InstanceCreationTime", "Instance Creation Time", TM, "1"),
    e!(0x0008, 0x0014, "InstanceCreatorUID", "Instance Creator UID", UI, "1"),
    e!(0x0008, 0x0016, "SOPClassUID", "SOP Class UID", UI, "1"),
    e!(0x0008, 0x0018, "SOPInstanceUID", "SOP Instance UID", UI, "1"),
    e!(0x0008, 0x0020, "StudyDate", "Study Date", DA, "1"),
    e!(0x0008, 0x0021, "SeriesDate", "Series Date", DA, "1"),
    e!(0x0008, 0x0022, "AcquisitionDate", "Acquisition Date", DA, "1"),
    e!(0x0008, 0x0023, "ContentDate", "Content Date", DA, "1"),
    e!(0x0008, 0x002A, "AcquisitionDateTime", "Acquisition DateTime", DT, "1"),
    e!(0x0008, 0x0030, "StudyTime", "Study Time", TM, "1"),
    e!(0x0008, 0x0031, "SeriesTime", "Series Time", TM, "1"),
    e!(0x0008, 0x0032, "AcquisitionTime", "Acquisition Time", TM, "1"),
    e!(0x0008, 0x0033, "ContentTime", "Content Time", TM, "1"),
    e!(0x0008, 0x0050, "AccessionNumber", "Accession Number", SH, "1"),
    e!(0x0008, 0x0052, "QueryRetrieveLevel", "Query/Retrieve Level", CS, "1"),
    e!(0x0008, 0x0054, "RetrieveAETitle", "Retrieve AE Title", AE, "1-n"),
    e!(0x0008, 0x0056, "InstanceAvailability", "Instance Availability", CS, "1"),
    e!(0x0008, 0x0060, "Modality", "Modality", CS, "1"),
    e!(0x0008, 0x0061, "ModalitiesInStudy", "Modalities in Study", CS, "1-n"),
    e!(0x0008, 0x0064, "ConversionType", "Conversion Type", CS, "1"),
    e!(0x0008, 0x0068, "PresentationIntentType", "Presentation Intent Type", CS, "1"),
    e!(0x0008, 0x0070, "Manufacturer", "Manufacturer", LO, "1"),
    e!(0x0008, 0x0080, "InstitutionName", "Institution Name", LO, "1"),
    e!(0x0008, 0x0081, "InstitutionAddress", "Institution Address", ST, "1"),
    e!(0x0008, 0x0090, "ReferringPhysicianName", "Referring Physician's Name", PN, "1"),
    e!(0x0008, 0x0100, "CodeValue", "Code Value", SH, "1"),
    e!(0x0008, 0x0102, "CodingSchemeDesignator", "Coding Scheme Designator", SH, "1"),
    e!(0x0008, 0x0104, "CodeMeaning", "Code Meaning", LO, "1"),
    e!(0x0008, 0x1030, "StudyDescription", "Study Description", LO, "1"),
    e!(0x0008, 0x103E, "SeriesDescription", "Series Description", LO, "1"),
    e!(0x0008, 0x1040, "InstitutionalDepartmentName", "Institutional Department Name", LO, "1"),
    e!(0x0008, 0x1048, "PhysiciansOfRecord", "Physician(s) of Record", PN, "1-n"),
    e!(0x0008, 0x1050, "PerformingPhysicianName", "Performing Physician's Name", PN, "1-n"),
    e!(0x0008, 0x1060, "NameOfPhysiciansReadingStudy", "Name of Physician(s) Reading Study", PN, "1-n"),
    e!(0x0008, 0x1070, "OperatorsName", "Operators' Name", PN, "1-n"),
    e!(0x0008, 0x1090, "ManufacturerModelName", "Manufacturer's Model Name", LO, "1"),
    e!(0x0008, 0x1110, "ReferencedStudySequence", "Referenced Study Sequence", SQ, "1"),
    e!(0x0008, 0x1111, "ReferencedPerformedProcedureStepSequence", "Referenced Performed Procedure Step Sequence", SQ, "1"),
    e!(0x0008, 0x1115, "ReferencedSeriesSequence", "Referenced Series Sequence", SQ, "1"),
    e!(0x0008, 0x1120, "ReferencedPatientSequence", "Referenced Patient Sequence", SQ, "1"),
    e!(0x0008, 0x1140, "ReferencedImageSequence", "Referenced Image Sequence", SQ, "1"),
    e!(0x0008, 0x1150, "ReferencedSOPClassUID", "Referenced SOP Class UID", UI, "1"),
    e!(0x0008, 0x1155, "ReferencedSOPInstanceUID", "Referenced SOP Instance UID", UI, "1"),
    e!(0x0008, 0x1199, "ReferencedSOPSequence", "Referenced SOP Sequence", SQ, "1"),
    e!(0x0008, 0x2111, "DerivationDescription", "Derivation Description", ST, "1"),
    e!(0x0008, 0x2112, "SourceImageSequence", "Source Image Sequence", SQ, "1"),

    // -- Patient (0010,xxxx) --
    e!(0x0010, 0x0010, "PatientName", "Patient's Name", PN, "1"),
    e!(0x0010, 0x0020, "PatientID", "Patient ID", LO, "1"),
    e!(0x0010, 0x0021, "IssuerOfPatientID", "Issuer of Patient ID", LO, "1"),
    e!(0x0010, 0x0030, "PatientBirthDate", "Patient's Birth Date", DA, "1"),
    e!(0x0010, 0x0032, "PatientBirthTime", "Patient's Birth Time", TM, "1"),
    e!(0x0010, 0x0040, "PatientSex", "Patient's Sex", CS, "1"),
    e!(0x0010, 0x1000, "OtherPatientIDs", "Other Patient IDs", LO, "1-n", retired),
    e!(0x0010, 0x1001, "OtherPatientNames", "Other Patient Names", PN, "1-n"),
    e!(0x0010, 0x1010, "PatientAge", "Patient's Age", AS, "1"),
    e!(0x0010, 0x1020, "PatientSize", "Patient's Size", DS, "1"),
    e!(0x0010, 0x1030, "PatientWeight", "Patient's Weight", DS, "1"),
    e!(0x0010, 0x1040, "PatientAddress", "Patient's Address", LO, "1"),
    e!(0x0010, 0x2000, "MedicalAlerts", "Medical Alerts", LO, "1-n"),
    e!(0x0010, 0x2110, "Allergies", "Allergies", LO, "1-n"),
    e!(0x0010, 0x2150, "CountryOfResidence", "Country of Residence", LO, "1"),
    e!(0x0010, 0x2160, "EthnicGroup", "Ethnic Group", SH, "1"),
    e!(0x0010, 0x2180, "Occupation", "Occupation", SH, "1"),
    e!(0x0010, 0x21A0, "SmokingStatus", "Smoking Status", CS, "1"),
    e!(0x0010, 0x21B0, "AdditionalPatientHistory", "Additional Patient History", LT, "1"),
    e!(0x0010, 0x21C0, "PregnancyStatus", "Pregnancy Status", US, "1"),
    e!(0x0010, 0x4000, "PatientComments", "Patient Comments", LT, "1"),

    // -- Acquisition (0018,xxxx) --
    e!(0x0018, 0x0010, "ContrastBolusAgent", "Contrast/Bolus Agent", LO, "1"),
    e!(0x0018, 0x0015, "BodyPartExamined", "Body Part Examined", CS, "1"),
    e!(0x0018, 0x0020, "ScanningSequence", "Scanning Sequence", CS, "1-n"),
    e!(0x0018, 0x0021, "SequenceVariant", "Sequence Variant", CS, "1-n"),
    e!(0x0018, 0x0022, "ScanOptions", "Scan Options", CS, "1-n"),
    e!(0x0018, 0x0023, "MRAcquisitionType", "MR Acquisition Type", CS, "1"),
    e!(0x0018, 0x0050, "SliceThickness", "Slice Thickness", DS, "1"),
    e!(0x0018, 0x0060, "KVP", "KVP", DS, "1"),
    e!(0x0018, 0x0080, "RepetitionTime", "Repetition Time", DS, "1"),
    e!(0x0018, 0x0081, "EchoTime", "Echo Time", DS, "1"),
    e!(0x0018, 0x0082, "InversionTime", "Inversion Time", DS, "1"),
    e!(0x0018, 0x0083, "NumberOfAverages", "Number of Averages", DS, "1"),
    e!(0x0018, 0x0084, "ImagingFrequency", "Imaging Frequency", DS, "1"),
    e!(0x0018, 0x0085, "ImagedNucleus", "Imaged Nucleus", SH, "1"),
    e!(0x0018, 0x0087, "MagneticFieldStrength", "Magnetic Field Strength", DS, "1"),
    e!(0x0018, 0x0088, "SpacingBetweenSlices", "Spacing Between Slices", DS, "1"),
    e!(0x0018, 0x0090, "DataCollectionDiameter", "Data Collection Diameter", DS, "1"),
    e!(0x0018, 0x1000, "DeviceSerialNumber", "Device Serial Number", LO, "1"),
    e!(0x0018, 0x1020, "SoftwareVersions", "Software Versions", LO, "1-n"),
    e!(0x0018, 0x1030, "ProtocolName", "Protocol Name", LO, "1"),
    e!(0x0018, 0x1040, "ContrastBolusRoute", "Contrast/Bolus Route", LO, "1"),
    e!(0x0018, 0x1041, "ContrastBolusVolume", "Contrast/Bolus Volume", DS, "1"),
    e!(0x0018, 0x1050, "SpatialResolution", "Spatial Resolution", DS, "1"),
    e!(0x0018, 0x1060, "TriggerTime", "Trigger Time", DS, "1"),
    e!(0x0018, 0x1090, "CardiacNumberOfImages", "Cardiac Number of Images", IS, "1"),
    e!(0x0018, 0x1100, "ReconstructionDiameter", "Reconstruction Diameter", DS, "1"),
    e!(0x0018, 0x1110, "DistanceSourceToDetector", "Distance Source to Detector", DS, "1"),
    e!(0x0018, 0x1111, "DistanceSourceToPatient", "Distance Source to Patient", DS, "1"),
    e!(0x0018, 0x1120, "GantryDetectorTilt", "Gantry/Detector Tilt", DS, "1"),
    e!(0x0018, 0x1130, "TableHeight", "Table Height", DS, "1"),
    e!(0x0018, 0x1140, "RotationDirection", "Rotation Direction", CS, "1"),
    e!(0x0018, 0x1150, "ExposureTime", "Exposure Time", IS, "1"),
    e!(0x0018, 0x1151, "XRayTubeCurrent", "X-Ray Tube Current", IS, "1"),
    e!(0x0018, 0x1152, "Exposure", "Exposure", IS, "1"),
    e!(0x0018, 0x1160, "FilterType", "Filter Type", SH, "1"),
    e!(0x0018, 0x1190, "FocalSpots", "Focal Spot(s)", DS, "1-n"),
    e!(0x0018, 0x1200, "DateOfLastCalibration", "Date of Last Calibration", DA, "1-n"),
    e!(0x0018, 0x1210, "ConvolutionKernel", "Convolution Kernel", SH, "1-n"),
    e!(0x0018, 0x5100, "PatientPosition", "Patient Position", CS, "1"),

    // -- Relationship / Image (0020,xxxx) --
    e!(0x0020, 0x000D, "StudyInstanceUID", "Study Instance UID", UI, "1"),
    e!(0x0020, 0x000E, "SeriesInstanceUID", "Series Instance UID", UI, "1"),
    e!(0x0020, 0x0010, "StudyID", "Study ID", SH, "1"),
    e!(0x0020, 0x0011, "SeriesNumber", "Series Number", IS, "1"),
    e!(0x0020, 0x0012, "AcquisitionNumber", "Acquisition Number", IS, "1"),
    e!(0x0020, 0x0013, "InstanceNumber", "Instance Number", IS, "1"),
    e!(0x0020, 0x0020, "PatientOrientation", "Patient Orientation", CS, "2"),
    e!(0x0020, 0x0032, "ImagePositionPatient", "Image Position (Patient)", DS, "3"),
    e!(0x0020, 0x0037, "ImageOrientationPatient", "Image Orientation (Patient)", DS, "6"),
    e!(0x0020, 0x0052, "FrameOfReferenceUID", "Frame of Reference UID", UI, "1"),
    e!(0x0020, 0x0060, "Laterality", "Laterality", CS, "1"),
    e!(0x0020, 0x0062, "ImageLaterality", "Image Laterality", CS, "1"),
    e!(0x0020, 0x1040, "PositionReferenceIndicator", "Position Reference Indicator", LO, "1"),
    e!(0x0020, 0x1041, "SliceLocation", "Slice Location", DS, "1"),
    e!(0x0020, 0x4000, "ImageComments", "Image Comments", LT, "1"),

    // -- Image presentation (0028,xxxx) --
    e!(0x0028, 0x0002, "SamplesPerPixel", "Samples per Pixel", US, "1"),
    e!(0x0028, 0x0004, "PhotometricInterpretation", "Photometric Interpretation", CS, "1"),
    e!(0x0028, 0x0006, "PlanarConfiguration", "Planar Configuration", US, "1"),
    e!(0x0028, 0x0008, "NumberOfFrames", "Number of Frames", IS, "1"),
    e!(0x0028, 0x0009, "FrameIncrementPointer", "Frame Increment Pointer", AT, "1-n"),
    e!(0x0028, 0x0010, "Rows", "Rows", US, "1"),
    e!(0x0028, 0x0011, "Columns", "Columns", US, "1"),
    e!(0x0028, 0x0030, "PixelSpacing", "Pixel Spacing", DS, "2"),
    e!(0x0028, 0x0034, "PixelAspectRatio", "Pixel Aspect Ratio", IS, "2"),
    e!(0x0028, 0x0100, "BitsAllocated", "Bits Allocated", US, "1"),
    e!(0x0028, 0x0101, "BitsStored", "Bits Stored", US, "1"),
    e!(0x0028, 0x0102, "HighBit", "High Bit", US, "1"),
    e!(0x0028, 0x0103, "PixelRepresentation", "Pixel Representation", US, "1"),
    e!(0x0028, 0x0106, "SmallestImagePixelValue", "Smallest Image Pixel Value", US, "1"),
    e!(0x0028, 0x0107, "LargestImagePixelValue", "Largest Image Pixel Value", US, "1"),
    e!(0x0028, 0x1050, "WindowCenter", "Window Center", DS, "1-n"),
    e!(0x0028, 0x1051, "WindowWidth", "Window Width", DS, "1-n"),
    e!(0x0028, 0x1052, "RescaleIntercept", "Rescale Intercept", DS, "1"),
    e!(0x0028, 0x1053, "RescaleSlope", "Rescale Slope", DS, "1"),
    e!(0x0028, 0x1054, "RescaleType", "Rescale Type", LO, "1"),
    e!(0x0028, 0x2110, "LossyImageCompression", "Lossy Image Compression", CS, "1"),

    // -- Study / Visit / Procedure (0032, 0038, 0040) --
    e!(0x0032, 0x1032, "RequestingPhysician", "Requesting Physician", PN, "1"),
    e!(0x0032, 0x1060, "RequestedProcedureDescription", "Requested Procedure Description", LO, "1"),
    e!(0x0038, 0x0010, "AdmissionID", "Admission ID", LO, "1"),
    e!(0x0038, 0x0300, "CurrentPatientLocation", "Current Patient Location", LO, "1"),
    e!(0x0038, 0x0500, "PatientState", "Patient State", LO, "1"),
    e!(0x0040, 0x0275, "RequestAttributesSequence", "Request Attributes Sequence", SQ, "1"),
    e!(0x0040, 0xA040, "ValueType", "Value Type", CS, "1"),
    e!(0x0040, 0xA043, "ConceptNameCodeSequence", "Concept Name Code Sequence", SQ, "1"),

    // -- SOP Common (0088, 2000+) --
    e!(0x0088, 0x0140, "StorageMediaFileSetUID", "Storage Media File-set UID", UI, "1"),
    e!(0x2000, 0x0010, "NumberOfCopies", "Number of Copies", IS, "1"),

    // -- Pixel data / framing (7FE0, FFFE) --
    e!(0x7FE0, 0x0008, "FloatPixelData", "Float Pixel Data", OF, "1"),
    e!(0x7FE0, 0x0009, "DoubleFloatPixelData", "Double Float Pixel Data", OD, "1"),
    e!(0x7FE0, 0x0010, "PixelData", "Pixel Data", OW, "1"),
    e!(0xFFFE, 0xE000, "Item", "Item", UN, "1"),
    e!(0xFFFE, 0xE00D, "ItemDelimitationItem", "Item Delimitation Item", UN, "1"),
    e!(0xFFFE, 0xE0DD, "SequenceDelimitationItem", "Sequence Delimitation Item", UN, "1"),
];
