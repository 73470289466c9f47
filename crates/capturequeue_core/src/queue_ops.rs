use crate::CaptureJob;

/// Moves the job at `from` to position `to`, shifting the rows in between.
/// Out-of-range indices leave the queue unchanged.
pub fn reorder(mut queue: Vec<CaptureJob>, from: usize, to: usize) -> Vec<CaptureJob> {
    if from >= queue.len() || to >= queue.len() {
        return queue;
    }
    let job = queue.remove(from);
    queue.insert(to, job);
    queue
}

/// Removes the job at `index`. An out-of-range index leaves the queue
/// unchanged.
pub fn remove(mut queue: Vec<CaptureJob>, index: usize) -> Vec<CaptureJob> {
    if index < queue.len() {
        queue.remove(index);
    }
    queue
}
