use std::future::Future;

use crate::domain::health::entities::ReadinessReport;

pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = ReadinessReport> + Send;
}
