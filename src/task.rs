use std::future::Future;

/// Runs a future to completion without making the caller wait.
///
/// On wasm the future is queued on the browser's microtask loop. On other
/// targets it runs inline on a local executor, which keeps the crate's
/// restore path exercisable from native test binaries.
pub(crate) fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(fut);

    #[cfg(not(target_arch = "wasm32"))]
    futures::executor::block_on(fut);
}
