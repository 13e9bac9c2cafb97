use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a grade sheet from being read
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("input file does not exist: {0:?}")]
    MissingInput(PathBuf),

    #[error("failed to read workbook {path:?}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook {0:?} contains no worksheets")]
    EmptyWorkbook(PathBuf),

    #[error("unrecognized grade sheet layout: no 序号 or 编号 header in the first {0} rows")]
    UnknownLayout(usize),
}
