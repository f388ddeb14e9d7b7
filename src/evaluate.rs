use tracing::{debug, warn};

use crate::store::ProductStore;
use crate::{Predicate, SegmentError, SegmentResult};

pub(crate) fn evaluate<S: ProductStore + ?Sized>(
    store: &S,
    predicate: &Predicate,
) -> Result<SegmentResult, SegmentError> {
    let products = store.find(predicate).map_err(|err| {
        warn!(error = %err, "product store query failed");
        err
    })?;

    let result = SegmentResult::new(!predicate.is_empty(), products);
    debug!(
        predicate = %predicate,
        status = %result.status(),
        matched = result.len(),
        "evaluated segment"
    );
    Ok(result)
}
