//! The extraction pipeline - the core of the library.
//!
//! One pass streams archive records through:
//! classify → extract → meaningfulness filter → aggregate.
//!
//! The pass is strictly sequential in arrival order: aggregation order is
//! part of the output, so records are never decoded in parallel. Per-record
//! anomalies degrade to a skip; only container-level failures abort.

pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod html;
pub mod http;
pub mod prompts;
pub mod reader;

pub use aggregate::Aggregator;
pub use classify::{classify, is_non_content_uri, Rejection};
pub use filter::is_meaningful;
pub use html::{clean_content, extract_document, DEFAULT_TITLE};

use std::io::BufRead;

use tracing::{debug, trace};
use warc::{WarcHeader, WarcReader};

use crate::error::Result;

/// Run one extraction pass over an archive byte stream.
///
/// Returns the assembled corpus once the stream ends. An archive with no
/// qualifying records yields the empty string, which is not an error. A
/// container-level decode failure aborts the pass with
/// [`ExtractionError::MalformedArchive`](crate::ExtractionError::MalformedArchive);
/// no partial corpus is returned.
pub fn extract_corpus<R: BufRead>(input: R) -> Result<String> {
    let mut aggregator = Aggregator::new();
    let mut records = 0usize;

    for record in WarcReader::new(input).iter_records() {
        let record = record?;
        records += 1;

        let target = record.header(WarcHeader::TargetURI);
        let uri = match classify(record.warc_type(), target.as_deref(), aggregator.seen()) {
            Ok(uri) => uri,
            Err(rejection) => {
                trace!(%rejection, "skipping record");
                continue;
            }
        };

        let page = filter::apply(html::extract(&uri, record.body()));
        if aggregator.append(&page) {
            debug!(uri = %page.uri, title = %page.title, "aggregated page");
        }
    }

    debug!(records, "archive pass complete");
    Ok(aggregator.finish())
}
