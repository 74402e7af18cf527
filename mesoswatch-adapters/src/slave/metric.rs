//! The recognized keys of the agent's `/metrics/snapshot` document.

macro_rules! slave_metrics {
    ($($variant:ident => $key:literal,)+) => {
        /// A metric the agent snapshot is known to carry.
        ///
        /// Each variant maps to exactly one external JSON key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SlaveMetric {
            $($variant,)+
        }

        impl SlaveMetric {
            /// Every recognized metric, in declaration order.
            pub const ALL: &'static [SlaveMetric] = &[$(SlaveMetric::$variant,)+];

            /// Number of recognized metrics.
            pub const COUNT: usize = Self::ALL.len();

            /// The external JSON key, e.g. `slave/cpus_percent`.
            pub const fn key(self) -> &'static str {
                match self {
                    $(SlaveMetric::$variant => $key,)+
                }
            }

            /// Look up a metric by its external JSON key.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(SlaveMetric::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

slave_metrics! {
    ContainerDestroyErrors => "containerizer/mesos/container_destroy_errors",
    ContainerLaunchErrors => "slave/container_launch_errors",
    CpusPercent => "slave/cpus_percent",
    CpusRevocablePercent => "slave/cpus_revocable_percent",
    CpusRevocableTotal => "slave/cpus_revocable_total",
    CpusRevocableUsed => "slave/cpus_revocable_used",
    CpusTotal => "slave/cpus_total",
    CpusUsed => "slave/cpus_used",
    DiskPercent => "slave/disk_percent",
    DiskRevocablePercent => "slave/disk_revocable_percent",
    DiskRevocableTotal => "slave/disk_revocable_total",
    DiskRevocableUsed => "slave/disk_revocable_used",
    DiskTotal => "slave/disk_total",
    DiskUsed => "slave/disk_used",
    ExecutorDirectoryMaxAllowedAgeSecs => "slave/executor_directory_max_allowed_age_secs",
    ExecutorsRegistering => "slave/executors_registering",
    ExecutorsRunning => "slave/executors_running",
    ExecutorsTerminated => "slave/executors_terminated",
    ExecutorsTerminating => "slave/executors_terminating",
    FrameworksActive => "slave/frameworks_active",
    InvalidFrameworkMessages => "slave/invalid_framework_messages",
    InvalidStatusUpdates => "slave/invalid_status_updates",
    MemPercent => "slave/mem_percent",
    MemRevocablePercent => "slave/mem_revocable_percent",
    MemRevocableTotal => "slave/mem_revocable_total",
    MemRevocableUsed => "slave/mem_revocable_used",
    MemTotal => "slave/mem_total",
    MemUsed => "slave/mem_used",
    RecoveryErrors => "slave/recovery_errors",
    Registered => "slave/registered",
    TasksFailed => "slave/tasks_failed",
    TasksFinished => "slave/tasks_finished",
    TasksKilled => "slave/tasks_killed",
    TasksLost => "slave/tasks_lost",
    TasksRunning => "slave/tasks_running",
    TasksStaging => "slave/tasks_staging",
    TasksStarting => "slave/tasks_starting",
    UptimeSecs => "slave/uptime_secs",
    ValidFrameworkMessages => "slave/valid_framework_messages",
    ValidStatusUpdates => "slave/valid_status_updates",
    SystemCpusTotal => "system/cpus_total",
    SystemLoad15Min => "system/load_15min",
    SystemLoad1Min => "system/load_1min",
    SystemLoad5Min => "system/load_5min",
    SystemMemFreeBytes => "system/mem_free_bytes",
    SystemMemTotalBytes => "system/mem_total_bytes",
}

impl SlaveMetric {
    /// Position of this metric in [`SlaveMetric::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}
