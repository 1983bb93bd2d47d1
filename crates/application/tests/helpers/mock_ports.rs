#![allow(dead_code)]

use async_trait::async_trait;
use netscene_application::ports::{ArpReader, ArpTable, PiholeGateway};
use netscene_domain::{DomainError, PiholeHost, PiholeStats, SessionCredential};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockArpReader {
    result: Arc<Mutex<Result<ArpTable, DomainError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockArpReader {
    pub fn with_devices(devices: ArpTable) -> Self {
        Self {
            result: Arc::new(Mutex::new(Ok(devices))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Arc::new(Mutex::new(Err(error))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArpReader for MockArpReader {
    async fn read_arp_table(&self) -> Result<ArpTable, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.lock().unwrap().clone()
    }
}

#[derive(Clone)]
pub struct MockPiholeGateway {
    auth_result: Arc<Mutex<Result<Option<SessionCredential>, DomainError>>>,
    summary_result: Arc<Mutex<Result<PiholeStats, DomainError>>>,
    auth_calls: Arc<AtomicUsize>,
    summary_calls: Arc<AtomicUsize>,
    last_password: Arc<Mutex<Option<String>>>,
    last_credential: Arc<Mutex<Option<SessionCredential>>>,
    last_host: Arc<Mutex<Option<PiholeHost>>>,
}

impl MockPiholeGateway {
    pub fn new(stats: PiholeStats) -> Self {
        Self {
            auth_result: Arc::new(Mutex::new(Ok(Some(SessionCredential::new("mock-sid"))))),
            summary_result: Arc::new(Mutex::new(Ok(stats))),
            auth_calls: Arc::new(AtomicUsize::new(0)),
            summary_calls: Arc::new(AtomicUsize::new(0)),
            last_password: Arc::new(Mutex::new(None)),
            last_credential: Arc::new(Mutex::new(None)),
            last_host: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_auth_result(&self, result: Result<Option<SessionCredential>, DomainError>) {
        *self.auth_result.lock().unwrap() = result;
    }

    pub fn set_summary_result(&self, result: Result<PiholeStats, DomainError>) {
        *self.summary_result.lock().unwrap() = result;
    }

    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    pub fn last_password(&self) -> Option<String> {
        self.last_password.lock().unwrap().clone()
    }

    pub fn last_credential(&self) -> Option<SessionCredential> {
        self.last_credential.lock().unwrap().clone()
    }

    pub fn last_host(&self) -> Option<PiholeHost> {
        self.last_host.lock().unwrap().clone()
    }
}

#[async_trait]
impl PiholeGateway for MockPiholeGateway {
    async fn authenticate(
        &self,
        _host: &PiholeHost,
        password: &str,
    ) -> Result<Option<SessionCredential>, DomainError> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_password.lock().unwrap() = Some(password.to_string());
        self.auth_result.lock().unwrap().clone()
    }

    async fn fetch_summary(
        &self,
        host: &PiholeHost,
        credential: Option<&SessionCredential>,
    ) -> Result<PiholeStats, DomainError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_credential.lock().unwrap() = credential.cloned();
        *self.last_host.lock().unwrap() = Some(host.clone());
        self.summary_result.lock().unwrap().clone()
    }
}

pub fn sample_stats() -> PiholeStats {
    PiholeStats {
        domains_being_blocked: 150_000,
        dns_queries_today: 12_345,
        ads_blocked_today: 678,
        ads_percentage_today: 5.49,
        status: "enabled".to_string(),
    }
}
