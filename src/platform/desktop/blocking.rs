// Desktop builds run core work inline on the UI thread; the busy flag is
// flipped around the call by the caller.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
