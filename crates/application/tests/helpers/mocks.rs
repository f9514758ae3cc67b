#![allow(dead_code)]

use async_trait::async_trait;
use mailguard_application::ports::{BlocklistSource, KvCache, MxLookup};
use mailguard_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Deterministic in-memory stand-in for the key-value cache port.
/// TTLs are recorded, not enforced; tests assert on them directly.
#[derive(Default)]
pub struct MockKvCache {
    entries: Mutex<HashMap<String, String>>,
    expirations: Mutex<HashMap<String, Duration>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
    incr_calls: AtomicUsize,
}

impl MockKvCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn expiry(&self, key: &str) -> Option<Duration> {
        self.expirations.lock().unwrap().get(key).copied()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    pub fn incr_calls(&self) -> usize {
        self.incr_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KvCache for MockKvCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("mock read failure".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("mock write failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self.expirations
            .lock()
            .unwrap()
            .insert(key.to_string(), ttl);
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64, DomainError> {
        self.incr_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("mock incr failure".to_string()));
        }
        let mut entries = self.entries.lock().unwrap();
        let count = entries
            .get(key)
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0)
            + 1;
        entries.insert(key.to_string(), count.to_string());
        Ok(count)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("mock expire failure".to_string()));
        }
        self.expirations
            .lock()
            .unwrap()
            .insert(key.to_string(), ttl);
        Ok(())
    }
}

/// MX lookup mock: per-domain answers with a live-query counter, so
/// tests can assert memoization actually short-circuits.
#[derive(Default)]
pub struct MockMxLookup {
    answers: Mutex<HashMap<String, bool>>,
    lookups: AtomicUsize,
}

impl MockMxLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers(answers: &[(&str, bool)]) -> Self {
        let mock = Self::new();
        for (domain, has_mx) in answers {
            mock.set_answer(domain, *has_mx);
        }
        mock
    }

    pub fn set_answer(&self, domain: &str, has_mx: bool) {
        self.answers
            .lock()
            .unwrap()
            .insert(domain.to_string(), has_mx);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MxLookup for MockMxLookup {
    async fn has_mx(&self, domain: &str) -> Result<bool, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        // Unknown domains behave like resolver failures: absent.
        Ok(*self.answers.lock().unwrap().get(domain).unwrap_or(&false))
    }
}

/// Blocklist source mock serving fixed text or an injected error.
pub struct MockBlocklistSource {
    content: Mutex<Result<String, DomainError>>,
}

impl MockBlocklistSource {
    pub fn with_text(text: &str) -> Self {
        Self {
            content: Mutex::new(Ok(text.to_string())),
        }
    }

    pub fn unreadable() -> Self {
        Self {
            content: Mutex::new(Err(DomainError::IoError("mock unreadable".to_string()))),
        }
    }

    pub fn set_text(&self, text: &str) {
        *self.content.lock().unwrap() = Ok(text.to_string());
    }
}

#[async_trait]
impl BlocklistSource for MockBlocklistSource {
    async fn read(&self) -> Result<String, DomainError> {
        self.content.lock().unwrap().clone()
    }
}
