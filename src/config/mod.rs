use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::algorithm::partition::DEFAULT_PARTITION_SEED;
use crate::algorithm::routine::RoutineOptions;
use crate::core::{PlanarError, PlanarResult};

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    /// 是否同时输出到标准输出
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "planarity_filter".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
            console: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub threads: usize,
    /// 未设置时与线程数相同
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions: Option<usize>,
    pub seed: u64,
    /// 大图模式：输入直接使用整数节点编号，跳过平面性检查
    pub large_graph: bool,
    /// 是否在运行前后调用平面性判定
    pub verify_planarity: bool,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: 1,
            partitions: None,
            seed: DEFAULT_PARTITION_SEED,
            large_graph: false,
            verify_planarity: true,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> PlanarResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> PlanarResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> PlanarResult<()> {
        if self.threads == 0 {
            return Err(PlanarError::Config("threads 必须大于 0".to_string()));
        }
        if self.partitions == Some(0) {
            return Err(PlanarError::Config("partitions 必须大于 0".to_string()));
        }
        if self.log.level.trim().is_empty() {
            return Err(PlanarError::Config("log.level 不能为空".to_string()));
        }
        Ok(())
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.unwrap_or(self.threads)
    }

    pub fn routine_options(&self) -> RoutineOptions {
        RoutineOptions::with_threads(self.threads)
            .with_partitions(self.partition_count())
            .with_seed(self.seed)
    }
}
