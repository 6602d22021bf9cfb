//! Timer-driven animator behaviour.

use std::thread;
use std::time::Duration;

use pv_anim::{Animator, RevealEvent};
use pv_search::Path;

const WAIT: Duration = Duration::from_secs(5);

/// Collect events for `generation` until its final step.
fn run_to_end(animator: &Animator, generation: u64) -> Vec<RevealEvent> {
    let mut seen = Vec::new();
    while let Some(event) = animator.next_event(WAIT) {
        if event.generation != generation {
            continue;
        }
        seen.push(event);
        if event.finished {
            break;
        }
    }
    seen
}

#[test]
fn reveals_every_index_in_order() {
    let mut animator = Animator::new(Duration::from_millis(10));
    let generation = animator.set_path(Path::from(vec![0, 1, 2, 3]));
    assert_eq!(animator.reveal_index(), 0);
    assert_eq!(animator.revealed(), vec![0]);

    let events = run_to_end(&animator, generation);
    let indices: Vec<usize> = events.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert!(events.last().is_some_and(|e| e.finished));

    assert_eq!(animator.reveal_index(), 3);
    assert!(animator.is_finished());
    assert_eq!(animator.revealed(), vec![0, 1, 2, 3]);
    assert_eq!(animator.revealed_segments(), vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn replacing_path_restarts_from_zero() {
    let mut animator = Animator::new(Duration::from_millis(200));
    let first = animator.set_path(Path::from((0..10).collect::<Vec<_>>()));
    thread::sleep(Duration::from_millis(450));

    let second = animator.set_path(Path::from(vec![9, 8, 7]));
    assert!(second > first);
    assert_eq!(animator.reveal_index(), 0);
    assert_eq!(animator.path().as_slice(), &[9, 8, 7]);

    // well inside the new path's first delay: the old timer must not have
    // advanced anything
    thread::sleep(Duration::from_millis(50));
    assert_eq!(animator.reveal_index(), 0);

    let events = run_to_end(&animator, second);
    assert_eq!(events.iter().map(|e| e.index).collect::<Vec<_>>(), vec![1, 2]);

    // the old path would have kept going for another 1.5s
    thread::sleep(Duration::from_millis(400));
    assert_eq!(animator.reveal_index(), 2);
    assert!(animator.drain_events().iter().all(|e| e.generation == second));
}

#[test]
fn clear_cancels_running_animation() {
    let mut animator = Animator::new(Duration::from_millis(20));
    animator.set_path(Path::from(vec![0, 1, 2, 3, 4, 5]));
    animator.clear();
    let _ = animator.drain_events();

    thread::sleep(Duration::from_millis(150));
    assert_eq!(animator.reveal_index(), 0);
    assert!(animator.path().is_empty());
    assert!(animator.drain_events().is_empty());
}

#[test]
fn empty_path_does_nothing() {
    let mut animator = Animator::new(Duration::from_millis(5));
    animator.set_path(Path::empty());
    thread::sleep(Duration::from_millis(30));
    assert_eq!(animator.reveal_index(), 0);
    assert!(animator.revealed().is_empty());
    assert!(animator.drain_events().is_empty());
}

/// Poll until the current reveal has finished, without reading any events.
fn wait_until_finished(animator: &Animator) {
    let deadline = std::time::Instant::now() + WAIT;
    while !animator.is_finished() && std::time::Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert!(animator.is_finished());
}

#[test]
fn undrained_events_do_not_outlive_their_path() {
    let mut animator = Animator::new(Duration::from_millis(1));
    let path: Vec<usize> = (0..20).collect();

    let mut generation = 0;
    for _ in 0..5 {
        let previous = generation;
        generation = animator.set_path(Path::from(path.clone()));
        assert!(generation > previous);
        wait_until_finished(&animator);
    }

    // only the last path's 19 steps can still be queued
    let events = animator.drain_events();
    assert!(events.iter().all(|e| e.generation == generation));
    assert!(events.len() <= 19);

    animator.set_path(Path::from(path.clone()));
    wait_until_finished(&animator);
    animator.clear();
    assert!(animator.drain_events().is_empty());
}
