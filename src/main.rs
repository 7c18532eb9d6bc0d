use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use planarity_filter::algorithm::{run_routine, LrPlanarityOracle, PlanarityOracle};
use planarity_filter::config::Config;
use planarity_filter::core::{Graph, PlanarError};
use planarity_filter::io::{GraphLoader, GraphWriter, NodeLabels};
use planarity_filter::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", about = "Extract a large planar subgraph from an edge list")]
struct Cli {
    /// Input file path
    #[clap(short, long)]
    input: PathBuf,

    /// Output file path
    #[clap(short, long)]
    output: PathBuf,

    /// Number of threads to use
    #[clap(short, long)]
    threads: Option<usize>,

    /// Number of partitions, defaults to the number of threads
    #[clap(short, long)]
    partitions: Option<usize>,

    /// Large graph mode, input must use unsigned ints for node identifiers
    #[clap(short, long)]
    large: bool,

    /// TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[clap(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<(Config, PathBuf, PathBuf)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if self.partitions.is_some() {
            config.partitions = self.partitions;
        }
        if self.large {
            config.large_graph = true;
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        config.validate()?;

        Ok((config, self.input, self.output))
    }
}

fn main() -> Result<()> {
    let (config, input, output) = Cli::parse().into_config()?;
    logging::init(&config.log)?;

    let outcome = run(&config, &input, &output);
    if let Err(err) = &outcome {
        error!("运行失败: {:#}", err);
        if err
            .downcast_ref::<PlanarError>()
            .is_some_and(PlanarError::is_invariant_violation)
        {
            error!("内部不变式被破坏，请附带输入文件报告此问题");
        }
    }

    logging::shutdown();
    outcome
}

fn run(config: &Config, input: &Path, output: &Path) -> Result<()> {
    info!("#######################################");
    info!("新的运行，参数如下");
    info!("输入: {}", input.display());
    info!("输出: {}", output.display());
    info!("线程数: {}", config.threads);
    info!("分区数: {}", config.partition_count());
    info!("大图模式: {}", config.large_graph);

    info!("加载输入");
    let (graph, labels) = load_input(config, input)?;

    let oracle = LrPlanarityOracle::new();
    let verify = config.verify_planarity && !config.large_graph;

    if verify {
        info!("检查输入图是否已经是平面图");
        if oracle.is_planar(&graph) {
            info!("输入图已经是平面图，原样输出");
            GraphWriter::write_file(&graph, labels.as_ref(), output)?;
            return Ok(());
        }
    }

    info!("运行平面子图提取");
    let (result, _report) = run_routine(&graph, &config.routine_options())?;

    if verify && !oracle.is_planar(&result) {
        return Err(PlanarError::NotPlanar {
            nodes: result.node_count(),
            edges: result.edge_count(),
        }
        .into());
    }

    GraphWriter::write_file(&result, labels.as_ref(), output)?;
    info!("结果已写入 {}", output.display());
    Ok(())
}

fn load_input(config: &Config, input: &Path) -> Result<(Graph, Option<NodeLabels>)> {
    if config.large_graph {
        let graph = GraphLoader::load_indexed(input)
            .with_context(|| format!("failed to load {}", input.display()))?;
        Ok((graph, None))
    } else {
        let loaded = GraphLoader::load_labeled(input)
            .with_context(|| format!("failed to load {}", input.display()))?;
        Ok((loaded.graph, Some(loaded.labels)))
    }
}
