//! 图输出模块
//!
//! 每条无向边输出一行 `a b`。提供标签映射时输出原始标签，否则输出节点编号。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::core::{Graph, PlanarError, PlanarResult};
use crate::io::loader::NodeLabels;

/// 图输出器
pub struct GraphWriter;

impl GraphWriter {
    /// 将图写入文件
    pub fn write_file<P: AsRef<Path>>(
        graph: &Graph,
        labels: Option<&NodeLabels>,
        path: P,
    ) -> PlanarResult<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        Self::write_to(graph, labels, &mut writer)?;
        writer.flush()?;
        debug!(
            "写出 {} 条边到 {}",
            graph.edge_count(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// 将图写入任意输出流
    pub fn write_to<W: Write>(
        graph: &Graph,
        labels: Option<&NodeLabels>,
        writer: &mut W,
    ) -> PlanarResult<()> {
        for (a, b) in graph.edges() {
            match labels {
                Some(labels) => {
                    let la = labels.label(a).ok_or(PlanarError::UnknownNode(a))?;
                    let lb = labels.label(b).ok_or(PlanarError::UnknownNode(b))?;
                    writeln!(writer, "{} {}", la, lb)?;
                }
                None => writeln!(writer, "{} {}", a, b)?,
            }
        }
        Ok(())
    }
}
