//! Decoding and candidate selection as the try-on orchestration uses them.

mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::*;
use tryon_vision::{
    classify_candidates, decode_image, read_image, select_for_user, CandidateImage,
    ClassificationResult, DecodeConfig, Orientation, OrientationClassifier, PixelBuffer,
    SelectionConfig, SelectionOutcome,
};

fn catalog() -> Vec<CandidateImage> {
    vec![
        CandidateImage::new("flatlay", PixelBuffer::filled(400, 400, WHITE).unwrap()),
        CandidateImage::new("model-back", back_portrait()),
        CandidateImage::new("model-front", front_portrait()),
    ]
}

#[test]
fn parallel_classification_preserves_order() {
    let classifier = OrientationClassifier::default();
    let classified = classify_candidates(&classifier, &catalog());

    let ids: Vec<_> = classified.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["flatlay", "model-back", "model-front"]);
    assert_eq!(classified[1].result.orientation, Orientation::Back);
    assert_eq!(classified[2].result.orientation, Orientation::Front);
    assert_eq!(classified[2].result, classifier.classify(&front_portrait()));
}

#[test]
fn front_shopper_gets_front_product() {
    let classifier = OrientationClassifier::default();
    let (user, selection) = select_for_user(
        &classifier,
        &front_portrait(),
        &catalog(),
        &SelectionConfig::default(),
    );

    assert_eq!(user.orientation, Orientation::Front);
    assert_eq!(selection.outcome, SelectionOutcome::Matched);
    assert_eq!(selection.ids(), vec!["model-front"]);
}

#[test]
fn back_shopper_gets_back_views_ranked() {
    let classifier = OrientationClassifier::default();
    let (user, selection) = select_for_user(
        &classifier,
        &back_portrait(),
        &catalog(),
        &SelectionConfig::default(),
    );

    assert_eq!(user.orientation, Orientation::Back);
    assert_eq!(selection.outcome, SelectionOutcome::Matched);
    // the blank flat-lay also lands on back, but ranks below the person
    assert_eq!(selection.ids(), vec!["model-back", "flatlay"]);
}

#[test]
fn unreadable_shopper_photo_forwards_everything() {
    let classifier = OrientationClassifier::default();
    let (user, selection) = select_for_user(
        &classifier,
        &PixelBuffer::filled(1, 1, SKIN).unwrap(),
        &catalog(),
        &SelectionConfig::default(),
    );

    assert_eq!(user, ClassificationResult::unknown());
    assert_eq!(selection.outcome, SelectionOutcome::UnknownUserOrientation);
    assert_eq!(selection.ids(), vec!["model-front", "model-back", "flatlay"]);
}

#[test]
fn data_url_upload_is_classified() {
    let url = format!(
        "data:image/png;base64,{}",
        STANDARD.encode(png_bytes(&front_portrait()))
    );

    let classifier = OrientationClassifier::default();
    let result = classifier.classify_base64(&url, &DecodeConfig::default());
    assert_eq!(result, classifier.classify(&front_portrait()));
}

#[test]
fn decoded_png_matches_source_buffer() {
    let source = back_portrait();
    let decoded = decode_image(&png_bytes(&source), &DecodeConfig::default()).unwrap();
    assert_eq!(decoded, source);
}

#[test]
fn image_file_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shopper.png");
    std::fs::write(&path, png_bytes(&front_portrait())).unwrap();

    let image = read_image(&path, &DecodeConfig::default()).unwrap();
    let result = OrientationClassifier::default().classify(&image);
    assert_eq!(result.orientation, Orientation::Front);
}

#[test]
fn missing_file_is_an_error_and_garbage_fails_open() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_image(dir.path().join("missing.png"), &DecodeConfig::default()).is_err());

    let classifier = OrientationClassifier::default();
    let result = classifier.classify_encoded(&[0x89, b'P', b'N', b'G'], &DecodeConfig::default());
    assert_eq!(result, ClassificationResult::unknown());
}
