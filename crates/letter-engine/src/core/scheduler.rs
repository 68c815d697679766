use crate::api::types::LetterState;

/// Deferred work the controller runs when its delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Swap views and settle in the target state.
    Transition(LetterState),
    /// Hide the customize modal after a selection.
    HideModal,
    /// Return the seal to its idle animation after a pulse.
    RestoreSealBreathing,
    /// Start the page-load entrance animation.
    EntranceReveal,
    /// Periodic decorative cue.
    AmbientCue,
}

/// Identity of a task slot. At most one task per key is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    Transition,
    HideModal,
    RestoreSealBreathing,
    EntranceReveal,
    AmbientCue,
}

impl Task {
    pub fn key(&self) -> TaskKey {
        match self {
            Task::Transition(_) => TaskKey::Transition,
            Task::HideModal => TaskKey::HideModal,
            Task::RestoreSealBreathing => TaskKey::RestoreSealBreathing,
            Task::EntranceReveal => TaskKey::EntranceReveal,
            Task::AmbientCue => TaskKey::AmbientCue,
        }
    }
}

#[derive(Debug, Clone)]
struct Scheduled {
    task: Task,
    due: f64,
    period: Option<f64>,
    seq: u64,
}

/// Keyed timer wheel driven by frame deltas.
///
/// Time only moves when [`Scheduler::advance`] is called, so tests control
/// it exactly. Scheduling a task whose key is already pending replaces the
/// pending one: the newer request supersedes.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: f64,
    next_seq: u64,
    tasks: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once after `delay` seconds. Returns true if it replaced a
    /// pending task with the same key.
    pub fn schedule(&mut self, task: Task, delay: f32) -> bool {
        self.insert(task, delay as f64, None)
    }

    /// Run `task` every `period` seconds, first after one period.
    pub fn schedule_every(&mut self, task: Task, period: f32) -> bool {
        let period = (period as f64).max(f64::EPSILON);
        self.insert(task, period, Some(period))
    }

    fn insert(&mut self, task: Task, delay: f64, period: Option<f64>) -> bool {
        let replaced = self.cancel(task.key());
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(Scheduled {
            task,
            due: self.now + delay.max(0.0),
            period,
            seq,
        });
        replaced
    }

    /// Drop the pending task with this key. Returns true if one was pending.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|s| s.task.key() != key);
        self.tasks.len() != before
    }

    pub fn pending(&self, key: TaskKey) -> Option<Task> {
        self.tasks.iter().find(|s| s.task.key() == key).map(|s| s.task)
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Move time forward and return the tasks that came due, earliest first.
    /// A periodic task fires at most once per call and is re-armed.
    pub fn advance(&mut self, dt: f32) -> Vec<Task> {
        self.now += dt.max(0.0) as f64;

        let mut due: Vec<Scheduled> = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due <= self.now {
                due.push(self.tasks.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));

        for fired in &due {
            if let Some(period) = fired.period {
                let missed = ((self.now - fired.due) / period).floor() + 1.0;
                let next = fired.due + period * missed;
                self.tasks.push(Scheduled { due: next, ..fired.clone() });
            }
        }

        due.into_iter().map(|s| s.task).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remaining(s: &Scheduler, key: TaskKey) -> Option<f64> {
        s.tasks
            .iter()
            .find(|t| t.task.key() == key)
            .map(|t| (t.due - s.now).max(0.0))
    }

    #[test]
    fn fires_after_delay() {
        let mut s = Scheduler::new();
        s.schedule(Task::HideModal, 0.5);
        assert!(s.advance(0.3).is_empty());
        assert_eq!(s.advance(0.25), vec![Task::HideModal]);
        assert!(s.is_empty());
    }

    #[test]
    fn same_key_supersedes() {
        let mut s = Scheduler::new();
        s.schedule(Task::Transition(LetterState::Opened), 0.4);
        s.advance(0.2);
        let replaced = s.schedule(Task::Transition(LetterState::Closed), 0.4);
        assert!(replaced);
        assert_eq!(s.len(), 1);
        assert!(s.advance(0.3).is_empty(), "original deadline must not fire");
        assert_eq!(s.advance(0.2), vec![Task::Transition(LetterState::Closed)]);
    }

    #[test]
    fn cancel_removes_pending() {
        let mut s = Scheduler::new();
        s.schedule(Task::HideModal, 0.5);
        assert!(s.cancel(TaskKey::HideModal));
        assert!(!s.cancel(TaskKey::HideModal));
        assert!(s.advance(1.0).is_empty());
    }

    #[test]
    fn due_tasks_come_out_in_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule(Task::HideModal, 0.5);
        s.schedule(Task::RestoreSealBreathing, 0.3);
        s.schedule(Task::Transition(LetterState::Opened), 0.4);
        assert_eq!(
            s.advance(1.0),
            vec![
                Task::RestoreSealBreathing,
                Task::Transition(LetterState::Opened),
                Task::HideModal,
            ]
        );
    }

    #[test]
    fn periodic_task_rearms() {
        let mut s = Scheduler::new();
        s.schedule_every(Task::AmbientCue, 8.0);
        assert!(s.advance(7.9).is_empty());
        assert_eq!(s.advance(0.2), vec![Task::AmbientCue]);
        assert!(s.is_pending(TaskKey::AmbientCue));
        let left = remaining(&s, TaskKey::AmbientCue).unwrap();
        assert!((left - 7.9).abs() < 1e-6, "remaining was {}", left);
    }

    #[test]
    fn periodic_task_fires_once_after_long_stall() {
        let mut s = Scheduler::new();
        s.schedule_every(Task::AmbientCue, 8.0);
        assert_eq!(s.advance(40.0), vec![Task::AmbientCue]);
        let left = remaining(&s, TaskKey::AmbientCue).unwrap();
        assert!(left > 0.0 && left <= 8.0);
    }

    #[test]
    fn degenerate_period_does_not_spin() {
        for period in [0.0, -1.0, 1e-9, f32::NAN] {
            let mut s = Scheduler::new();
            s.schedule_every(Task::AmbientCue, period);
            for _ in 0..120 {
                assert!(s.advance(1.0 / 60.0).len() <= 1);
            }
            s.advance(3600.0);
            assert_eq!(s.advance(1.0 / 60.0), vec![Task::AmbientCue], "period {}", period);
        }
    }
}
