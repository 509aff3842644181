use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("not a readable workbook: {0}")]
    Workbook(#[source] calamine::Error),

    #[error("workbook contains no sheets")]
    NoSheets,

    #[error("could not read sheet \"{sheet}\": {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}
