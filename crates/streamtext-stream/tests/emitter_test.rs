use std::sync::Arc;
use std::time::Duration;

use streamtext_stream::{ChunkEmitter, EmitOutcome, Frame, StreamProfile, CLIMATE_REPORT};
use tokio::time::{timeout, Instant};

fn report_emitter(profile: StreamProfile) -> ChunkEmitter {
    ChunkEmitter::new(Arc::from(CLIMATE_REPORT), profile)
}

async fn drain(mut handle: streamtext_stream::EmitterHandle) -> (Vec<Frame>, EmitOutcome) {
    let mut frames = Vec::new();
    while let Some(frame) = handle.receiver.recv().await {
        frames.push(frame);
    }
    let outcome = handle.task.await.unwrap();
    (frames, outcome)
}

#[tokio::test(start_paused = true)]
async fn test_character_stream_completes_in_order() {
    let emitter = report_emitter(StreamProfile::character());
    let (frames, outcome) = drain(emitter.spawn()).await;

    assert_eq!(frames, emitter.frames());
    assert_eq!(outcome, EmitOutcome::Completed { frames: 8 });

    let text: String = frames.iter().filter_map(Frame::content).collect();
    assert_eq!(text, CLIMATE_REPORT);
}

#[tokio::test(start_paused = true)]
async fn test_character_stream_pacing() {
    let start = Instant::now();
    let (frames, _) = drain(report_emitter(StreamProfile::character()).spawn()).await;

    // One 50ms pause after each of the eight content frames.
    assert_eq!(frames.len(), 9);
    assert!(start.elapsed() >= Duration::from_millis(400));
    assert!(start.elapsed() < Duration::from_millis(450));
}

#[tokio::test(start_paused = true)]
async fn test_word_stream_waits_before_first_frame() {
    let mut handle = report_emitter(StreamProfile::word()).spawn();
    let start = Instant::now();

    let first = handle.receiver.recv().await.unwrap();
    assert!(first.content().is_some());
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_after_third_frame_stops_task() {
    let mut handle = report_emitter(StreamProfile::character()).spawn();

    for _ in 0..3 {
        let frame = handle.receiver.recv().await.unwrap();
        assert!(!frame.is_done());
    }
    drop(handle.receiver);

    let outcome = timeout(Duration::from_secs(1), handle.task)
        .await
        .expect("emitter did not stop after disconnect")
        .unwrap();
    assert_eq!(outcome, EmitOutcome::Cancelled { frames_sent: 3 });
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_during_initial_delay() {
    let handle = report_emitter(StreamProfile::word()).spawn();
    drop(handle.receiver);

    let outcome = timeout(Duration::from_millis(10), handle.task)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(outcome, EmitOutcome::Cancelled { frames_sent: 0 });
}

#[tokio::test(start_paused = true)]
async fn test_empty_text_emits_only_done() {
    let emitter = ChunkEmitter::new(Arc::from(""), StreamProfile::word());
    let (frames, outcome) = drain(emitter.spawn()).await;

    assert_eq!(frames, vec![Frame::Done]);
    assert_eq!(outcome, EmitOutcome::Completed { frames: 0 });
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_streams_are_independent() {
    let emitter = report_emitter(StreamProfile::character());
    let slow = emitter.spawn();
    let fast = emitter.spawn();
    assert_ne!(slow.stream_id, fast.stream_id);

    // Leaving `slow` unread never holds back `fast`.
    let (frames, outcome) = drain(fast).await;
    assert_eq!(frames.len(), 9);
    assert_eq!(outcome, EmitOutcome::Completed { frames: 8 });

    let (frames, _) = drain(slow).await;
    assert_eq!(frames, emitter.frames());
}
