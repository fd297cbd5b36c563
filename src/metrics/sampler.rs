use super::{MetricError, MetricResult, Sample, Sampler};
use log::{debug, info};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Aggregate CPU usage across all processors, backed by `sysinfo`.
#[derive(Debug)]
pub struct SystemSampler {
    system: System,
}

impl SystemSampler {
    pub fn new() -> MetricResult<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MetricError::MetricUnavailable {
                reason: format!("platform `{}` is not supported", std::env::consts::OS),
            });
        }

        let system = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );
        if system.cpus().is_empty() {
            return Err(MetricError::MetricUnavailable {
                reason: "no processors reported".to_owned(),
            });
        }

        info!("Opened CPU usage counter over {} processors", system.cpus().len());
        Ok(Self { system })
    }

    pub fn cpu_count(&self) -> usize {
        self.system.cpus().len()
    }
}

impl Sampler for SystemSampler {
    fn read(&mut self) -> MetricResult<Sample> {
        self.system.refresh_cpu_usage();
        let usage = self.system.global_cpu_usage();
        if !usage.is_finite() {
            return Err(MetricError::ReadFailed {
                reason: format!("counter returned {usage}"),
            });
        }
        debug!("CPU usage sample: {usage:.1}%");
        Ok(Sample::new(usage))
    }
}
