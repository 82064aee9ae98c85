//! Shared mock collaborators for engine integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use griot_core::{content_hash, PostRecord};
use griot_error::{GenerationError, GriotResult, PublishError, StoreError};
use griot_interface::{ContentGenerator, PostId, PostStore, Publisher};
use griot_store::MemoryStore;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Generator that replays a script of text results, then unique defaults.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<String, String>>>,
    pub text_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
    image_ok: bool,
}

impl ScriptedGenerator {
    /// Every call yields fresh, unique text; images succeed.
    pub fn fresh() -> Self {
        Self::scripted(Vec::new())
    }

    /// Replay the given results in order, then fall back to unique text.
    /// `Err` entries simulate a generation backend failure.
    pub fn scripted(script: Vec<Result<String, String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            text_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            image_ok: true,
        }
    }

    /// Same as [`fresh`](Self::fresh) but the image backend always fails.
    pub fn without_images() -> Self {
        Self {
            image_ok: false,
            ..Self::fresh()
        }
    }

    pub fn text_call_count(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn image_call_count(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate_text(&self, topic: &str, _style: &str) -> GriotResult<String> {
        let call = self.text_calls.fetch_add(1, Ordering::SeqCst) + 1;
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(GenerationError::new(message).into()),
            None => Ok(format!("Unique post {call} about {topic}.")),
        }
    }

    async fn generate_image(&self, _topic: &str, _style: &str) -> GriotResult<Vec<u8>> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        if self.image_ok {
            Ok(vec![0x89, 0x50, 0x4e, 0x47])
        } else {
            Err(GenerationError::new("image backend down").into())
        }
    }
}

/// Publisher that records calls and can be made to fail.
pub struct RecordingPublisher {
    pub calls: AtomicUsize,
    pub published: Mutex<Vec<(String, bool)>>,
    fail: bool,
}

impl RecordingPublisher {
    pub fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            published: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::succeeding()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// (text, had_image) pairs, in publish order.
    pub fn published_posts(&self) -> Vec<(String, bool)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, text: &str, image: Option<&[u8]>) -> GriotResult<PostId> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(PublishError::new("page rejected the post").into());
        }
        self.published
            .lock()
            .unwrap()
            .push((text.to_string(), image.is_some()));
        Ok(PostId::new(format!("post_{call}")))
    }
}

/// Store whose reads work but whose appends always fail.
#[derive(Default)]
pub struct AppendFailingStore {
    inner: MemoryStore,
}

#[async_trait]
impl PostStore for AppendFailingStore {
    async fn records_for_date(&self, date: NaiveDate) -> GriotResult<Vec<PostRecord>> {
        self.inner.records_for_date(date).await
    }

    async fn records_since(&self, since: NaiveDate) -> GriotResult<Vec<PostRecord>> {
        self.inner.records_since(since).await
    }

    async fn append(&self, _record: &PostRecord) -> GriotResult<()> {
        Err(StoreError::unavailable("backing sheet offline").into())
    }
}

/// A minimal record for seeding history.
pub fn seed_record(date: NaiveDate, topic: &str, message: &str, seq: u32) -> PostRecord {
    PostRecord {
        date,
        topic: topic.to_string(),
        message: message.to_string(),
        content_hash: content_hash(message),
        sequence_number: seq,
        external_post_id: Some(format!("seed_{seq}")),
        timestamp: Utc::now(),
    }
}
