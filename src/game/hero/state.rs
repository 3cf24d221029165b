// Hero state machine

use super::context::CharacterContext;
use super::entity::{Direction, Hero};
use crate::engine::animation::SubscriptionId;
use log::{debug, info};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Represents the current state of the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// Standing still
    #[default]
    Idle,
    /// Moving horizontally at full speed
    Run,
    /// Crouching in place
    Crouch,
    /// Moving horizontally while crouched, at reduced speed
    CrouchWalk,
    /// Playing the attack animation through once
    Attack,
}

impl CharacterState {
    /// Every state, in declaration order
    pub const ALL: [CharacterState; 5] = [
        CharacterState::Idle,
        CharacterState::Run,
        CharacterState::Crouch,
        CharacterState::CrouchWalk,
        CharacterState::Attack,
    ];

    /// Get the animation played on entering this state
    pub fn animation_key(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Crouch => "crouch",
            Self::CrouchWalk => "crouch_walk",
            Self::Attack => "attack",
        }
    }
}

impl fmt::Display for CharacterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.animation_key())
    }
}

/// Completion tracking for one Attack entry
///
/// Every entry gets its own flag and subscription, so a completion left over
/// from an earlier entry can never finish the current one.
#[derive(Debug, Default)]
struct AttackTracker {
    finished: Rc<Cell<bool>>,
    subscription: Option<SubscriptionId>,
}

impl AttackTracker {
    /// Start tracking a fresh entry
    fn arm(&mut self, hero: &mut Hero) {
        self.disarm(hero);

        let finished = Rc::new(Cell::new(false));
        let flag = Rc::clone(&finished);
        self.finished = finished;
        self.subscription = Some(hero.once_complete(
            CharacterState::Attack.animation_key(),
            Box::new(move || flag.set(true)),
        ));
    }

    /// Drop the pending subscription and clear the flag
    fn disarm(&mut self, hero: &mut Hero) {
        if let Some(id) = self.subscription.take() {
            hero.animation.cancel(id);
        }
        self.finished.set(false);
    }

    fn is_finished(&self) -> bool {
        self.finished.get()
    }
}

/// State machine that drives the hero, one step per frame
#[derive(Debug)]
pub struct CharacterStateMachine {
    current_state: CharacterState,
    previous_state: CharacterState,
    frames_in_state: u64,
    transition_count: u64,
    attack: AttackTracker,
}

impl Default for CharacterStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: CharacterState::Idle,
            previous_state: CharacterState::Idle,
            frames_in_state: 0,
            transition_count: 0,
            attack: AttackTracker::default(),
        }
    }

    /// Get the current state
    pub fn state(&self) -> CharacterState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> CharacterState {
        self.previous_state
    }

    /// Get the number of steps spent in the current state
    pub fn frames_in_state(&self) -> u64 {
        self.frames_in_state
    }

    /// Get the number of transitions taken since spawn
    pub fn transition_count(&self) -> u64 {
        self.transition_count
    }

    /// Check if state changed on the last step
    pub fn state_just_changed(&self) -> bool {
        self.transition_count > 0 && self.frames_in_state == 0
    }

    /// Enter the initial state (called once at spawn)
    pub fn start(&mut self, ctx: &mut CharacterContext) {
        self.on_enter(self.current_state, ctx);
        info!("Entered state: {}", self.current_state);
    }

    /// Run one frame: evaluate the current state and switch if it asks to
    pub fn step(&mut self, ctx: &mut CharacterContext) -> CharacterState {
        let next = self.on_update(ctx);
        self.frames_in_state += 1;
        self.transition(ctx, next);
        self.current_state
    }

    /// Transition to a new state
    /// Returns false when `next` is already the current state
    pub fn transition(&mut self, ctx: &mut CharacterContext, next: CharacterState) -> bool {
        if next == self.current_state {
            return false;
        }
        self.force_transition(ctx, next);
        true
    }

    /// Exit and re-enter even when `next` is the current state
    pub fn force_transition(&mut self, ctx: &mut CharacterContext, next: CharacterState) {
        let previous = self.current_state;
        self.on_exit(previous, ctx);
        self.on_enter(next, ctx);

        self.previous_state = previous;
        self.current_state = next;
        self.frames_in_state = 0;
        self.transition_count += 1;
        info!("Switched to state: {}", next);
    }

    /// Evaluate the current state's rules and movement for this frame
    ///
    /// Rules are checked in priority order; the first match wins.
    pub fn on_update(&mut self, ctx: &mut CharacterContext) -> CharacterState {
        match self.current_state {
            CharacterState::Idle => update_idle(ctx),
            CharacterState::Run => update_run(ctx),
            CharacterState::Crouch => update_crouch(ctx),
            CharacterState::CrouchWalk => update_crouch_walk(ctx),
            CharacterState::Attack => {
                // Movement and crouch input cannot cut an attack short
                if self.attack.is_finished() {
                    CharacterState::Idle
                } else {
                    CharacterState::Attack
                }
            }
        }
    }

    fn on_enter(&mut self, state: CharacterState, ctx: &mut CharacterContext) {
        ctx.hero.play(state.animation_key());
        if state == CharacterState::Attack {
            self.attack.arm(&mut ctx.hero);
        }
    }

    fn on_exit(&mut self, state: CharacterState, ctx: &mut CharacterContext) {
        if state == CharacterState::Attack {
            self.attack.disarm(&mut ctx.hero);
        }
    }
}

/// Fire an attack on a fresh primary press (Idle and Run only)
///
/// The lock is only released here, so releasing the button in any other
/// state keeps it set until Idle or Run runs again.
fn attack_triggered(ctx: &mut CharacterContext) -> bool {
    let pointer = ctx.input().pointer;

    if pointer.primary_pressed() && !ctx.attack_locked {
        ctx.attack_locked = true;
        debug!("Attack triggered, lock set");
        return true;
    }

    if !pointer.primary_down && ctx.attack_locked {
        ctx.attack_locked = false;
        debug!("Attack lock released");
    }

    false
}

/// Move the hero toward the held direction; left wins when both are held
fn walk(ctx: &mut CharacterContext, speed: f32) {
    let input = *ctx.input();
    if input.left_held {
        ctx.hero.walk(Direction::Left, speed);
    } else if input.right_held {
        ctx.hero.walk(Direction::Right, speed);
    }
}

fn update_idle(ctx: &mut CharacterContext) -> CharacterState {
    if attack_triggered(ctx) {
        return CharacterState::Attack;
    }

    let input = ctx.input();
    if input.crouch_held {
        CharacterState::Crouch
    } else if input.horizontal_held() {
        CharacterState::Run
    } else {
        CharacterState::Idle
    }
}

fn update_run(ctx: &mut CharacterContext) -> CharacterState {
    if attack_triggered(ctx) {
        return CharacterState::Attack;
    }

    let input = *ctx.input();
    if input.crouch_held {
        return CharacterState::CrouchWalk;
    }
    if !input.horizontal_held() {
        return CharacterState::Idle;
    }

    let speed = ctx.stats.run_speed;
    walk(ctx, speed);
    CharacterState::Run
}

fn update_crouch(ctx: &mut CharacterContext) -> CharacterState {
    let input = ctx.input();
    if !input.crouch_held {
        CharacterState::Idle
    } else if input.horizontal_held() {
        CharacterState::CrouchWalk
    } else {
        CharacterState::Crouch
    }
}

fn update_crouch_walk(ctx: &mut CharacterContext) -> CharacterState {
    let input = *ctx.input();
    if !input.crouch_held {
        return CharacterState::Run;
    }
    if !input.horizontal_held() {
        return CharacterState::Crouch;
    }

    let speed = ctx.stats.crouch_speed();
    walk(ctx, speed);
    CharacterState::CrouchWalk
}
