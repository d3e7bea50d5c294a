use fingerspell::core::{FingerMetric, FingerParams, HandMetrics, LandmarkPoint};
use fingerspell::core::{INDEX_MCP, MIDDLE_MCP, PINKY_MCP, RING_MCP};
use fingerspell::core::{INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP};
use fingerspell::letters::{reference_pose, LetterClassifier};
use fingerspell::{ClassificationResult, FramePipeline, Letter, Session};
use approx::assert_relative_eq;
use nalgebra::Vector3;

fn reference_frame(letter: Letter) -> Vec<LandmarkPoint> {
    reference_pose(letter).unwrap().into_vec()
}

fn centroid(frame: &[LandmarkPoint]) -> (f32, f32) {
    let n = frame.len() as f32;
    let sx: f32 = frame.iter().map(|p| p.x).sum();
    let sy: f32 = frame.iter().map(|p| p.y).sum();
    (sx / n, sy / n)
}

fn results_for(pipeline: &FramePipeline, frame: &[LandmarkPoint]) -> Vec<ClassificationResult> {
    Letter::ALL
        .into_iter()
        .map(|target| pipeline.process_frame(Some(frame), target))
        .collect()
}

#[test]
fn processing_is_idempotent() {
    let pipeline = FramePipeline::default();
    for letter in Letter::ALL {
        let frame = reference_frame(letter);
        assert_eq!(results_for(&pipeline, &frame), results_for(&pipeline, &frame));
    }
}

#[test]
fn scaling_about_the_centroid_keeps_every_result() {
    let pipeline = FramePipeline::default();
    for letter in Letter::ALL {
        let frame = reference_frame(letter);
        let expected = results_for(&pipeline, &frame);
        let (cx, cy) = centroid(&frame);
        for k in [0.25_f32, 0.6, 1.7, 4.0] {
            let scaled: Vec<_> = frame
                .iter()
                .map(|p| LandmarkPoint::new(cx + k * (p.x - cx), cy + k * (p.y - cy), p.z))
                .collect();
            assert_eq!(results_for(&pipeline, &scaled), expected, "{letter} k={k}");
        }
    }
}

#[test]
fn translation_keeps_every_result() {
    let pipeline = FramePipeline::default();
    for letter in Letter::ALL {
        let frame = reference_frame(letter);
        let expected = results_for(&pipeline, &frame);
        for (dx, dy) in [(0.25_f32, -0.4_f32), (-0.1, 0.05), (3.0, 2.0)] {
            let moved: Vec<_> = frame
                .iter()
                .map(|p| LandmarkPoint::new(p.x + dx, p.y + dy, p.z))
                .collect();
            assert_eq!(results_for(&pipeline, &moved), expected, "{letter} +({dx}, {dy})");
        }
    }
}

#[test]
fn wrong_landmark_counts_wait() {
    let pipeline = FramePipeline::default();
    let full = reference_frame(Letter::B);
    let mut long = full.clone();
    long.extend_from_slice(&full);
    for frame in [&full[..1], &full[..20], &long[..22], &long[..]] {
        for target in Letter::ALL {
            assert_eq!(
                pipeline.process_frame(Some(frame), target),
                ClassificationResult::Waiting,
                "{} points, {target}",
                frame.len()
            );
        }
    }
}

#[test]
fn missing_or_empty_frames_wait_for_every_letter() {
    let pipeline = FramePipeline::default();
    for target in Letter::ALL {
        assert_eq!(pipeline.process_frame(None, target), ClassificationResult::Waiting);
        assert_eq!(pipeline.process_frame(Some(&[]), target), ClassificationResult::Waiting);
    }
}

#[test]
fn fingers_on_the_extended_boundary_never_affirm() {
    let params = FingerParams::default();
    let edge = FingerMetric::from_angle(params.extended_min_angle, Vector3::new(0.0, -1.0, 0.0), &params);
    let metrics = HandMetrics::from_fingers([edge; 5]);
    let hand = fingerspell::core::normalize(&reference_pose(Letter::U).unwrap()).unwrap();
    let classifier = LetterClassifier::default();
    for target in Letter::ALL {
        assert_eq!(
            classifier.classify(target, &metrics, &hand),
            ClassificationResult::Incorrect,
            "{target}"
        );
    }
}

#[test]
fn navigation_wraps_at_z_and_stops_at_a() {
    let mut session = Session::starting_at(Letter::Z);
    session.next_letter();
    assert_eq!(session.current_letter(), Letter::A);
    session.previous_letter();
    assert_eq!(session.current_letter(), Letter::A);
}

#[test]
fn stray_letter_codes_leave_the_session_alone() {
    let mut session = Session::new();
    session.set_letter("h");
    session.set_letter("5");
    assert_eq!(session.current_letter(), Letter::H);
}

#[test]
fn raised_index_with_lower_fingers_reads_as_d() {
    let frame = reference_frame(Letter::D);
    let y = |i: usize| frame[i].y;
    assert!(y(INDEX_TIP) < y(MIDDLE_TIP));
    assert!(y(MIDDLE_TIP) < y(RING_TIP));
    assert!(y(RING_TIP) < y(PINKY_TIP));
    assert!(frame[THUMB_TIP].x < frame[INDEX_TIP].x);

    let pipeline = FramePipeline::default();
    assert_eq!(
        pipeline.process_frame(Some(&frame), Letter::D),
        ClassificationResult::Correct
    );
}

#[test]
fn fist_is_not_b() {
    let frame = reference_frame(Letter::S);
    for (mcp, tip) in [(INDEX_MCP, INDEX_TIP), (MIDDLE_MCP, MIDDLE_TIP), (RING_MCP, RING_TIP), (PINKY_MCP, PINKY_TIP)] {
        assert!(frame[tip].y > frame[mcp].y, "tip {tip} above its knuckle");
    }
    let pipeline = FramePipeline::default();
    assert_eq!(
        pipeline.process_frame(Some(&frame), Letter::B),
        ClassificationResult::Incorrect
    );
}

#[test]
fn session_feedback_follows_frames() {
    let pipeline = FramePipeline::default();
    let mut session = Session::new();
    let a = reference_frame(Letter::A);
    let b = reference_frame(Letter::B);

    assert_eq!(pipeline.process_for_session(&mut session, Some(&a)), ClassificationResult::Correct);
    assert_eq!(pipeline.process_for_session(&mut session, Some(&b)), ClassificationResult::Incorrect);
    session.next_letter();
    assert_eq!(session.last_result(), ClassificationResult::Incorrect);
    assert_eq!(pipeline.process_for_session(&mut session, Some(&b)), ClassificationResult::Correct);
    assert_eq!(session.last_result().message(), "Correct!");
}

#[test]
fn evaluation_reports_a_unit_sized_hand() {
    let pipeline = FramePipeline::default();
    let frame = reference_frame(Letter::C);
    let eval = pipeline.evaluate(&frame, Letter::C).unwrap();
    assert_eq!(eval.result, ClassificationResult::Correct);

    let pts = eval.hand.points();
    let span = |f: fn(&LandmarkPoint) -> f32| {
        let lo = pts.iter().map(f).fold(f32::INFINITY, f32::min);
        let hi = pts.iter().map(f).fold(f32::NEG_INFINITY, f32::max);
        (lo, hi)
    };
    let (x0, x1) = span(|p| p.x);
    let (y0, y1) = span(|p| p.y);
    assert_relative_eq!((x1 - x0).max(y1 - y0), 1.0, epsilon = 1e-5);
    assert_relative_eq!(0.5 * (x0 + x1), 0.5, epsilon = 1e-5);
    assert_relative_eq!(0.5 * (y0 + y1), 0.5, epsilon = 1e-5);
}
