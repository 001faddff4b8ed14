//! Minimal discrete-event kernel.
//!
//! Agents react to broadcast events and may schedule further events. The
//! loop pops events in time order (first-in first-out among events sharing a
//! time), hands each one to every agent, and stops once the next event would
//! fall at or beyond the requested horizon.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Event<T> {
    t: usize,
    seq: u64,
    data: T,
}

impl<T> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t && self.seq == other.seq
    }
}

impl<T> Eq for Event<T> {}

impl<T> Ord for Event<T> {
    // Reversed so the max-heap yields the earliest (t, seq) first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .t
            .cmp(&self.t)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Event<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// What an agent hands back after reacting to an event
pub struct Response<T, S> {
    pub events: Vec<(usize, T)>,
    pub agents: Vec<Box<dyn Agent<T, S>>>,
}

impl<T, S> Response<T, S> {
    pub fn new() -> Response<T, S> {
        Response {
            events: Vec::new(),
            agents: Vec::new(),
        }
    }

    pub fn event(t: usize, data: T) -> Response<T, S> {
        Response {
            events: vec![(t, data)],
            agents: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.agents.is_empty()
    }
}

impl<T, S> Default for Response<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Agent<T, S> {
    fn act(&mut self, _current_t: usize, _data: &T) -> Response<T, S> {
        Response::new()
    }

    /// Observable state, collected by [`EventLoop::stats`]
    fn stats(&self) -> S;

    /// Called once when the loop stops advancing time.
    fn halt(&mut self, _current_t: usize) {}
}

pub struct EventLoop<T, S> {
    queue: BinaryHeap<Event<T>>,
    next_seq: u64,
    current_t: usize,
    agents: Vec<Box<dyn Agent<T, S>>>,
}

impl<T, S> EventLoop<T, S> {
    pub fn new(events: Vec<(usize, T)>, agents: Vec<Box<dyn Agent<T, S>>>) -> EventLoop<T, S> {
        let mut event_loop = EventLoop {
            queue: BinaryHeap::with_capacity(events.len()),
            next_seq: 0,
            current_t: 0,
            agents,
        };
        for (t, data) in events {
            event_loop.schedule(t, data);
        }
        event_loop
    }

    pub fn current_t(&self) -> usize {
        self.current_t
    }

    fn schedule(&mut self, t: usize, data: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Event { t, seq, data });
    }

    fn broadcast(&mut self) {
        let Some(event) = self.queue.pop() else {
            return;
        };
        self.current_t = event.t;

        let mut scheduled = Vec::new();
        let mut new_agents = Vec::new();
        for agent in &mut self.agents {
            let response = agent.act(self.current_t, &event.data);
            // Events in the past can never be delivered
            scheduled.extend(
                response
                    .events
                    .into_iter()
                    .filter(|(t, _)| *t >= event.t),
            );
            new_agents.extend(response.agents);
        }
        for (t, data) in scheduled {
            self.schedule(t, data);
        }
        self.agents.extend(new_agents);
    }

    /// Process every event strictly before `until`, then halt all agents.
    pub fn run(&mut self, until: usize) {
        while let Some(next) = self.queue.peek() {
            if next.t >= until {
                break;
            }
            self.broadcast();
        }
        for agent in &mut self.agents {
            agent.halt(self.current_t);
        }
    }

    pub fn stats(&self) -> Vec<S> {
        self.agents.iter().map(|agent| agent.stats()).collect()
    }
}
