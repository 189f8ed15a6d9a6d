/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::$k))
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::KeyWithModifier(
            $crate::keycode::KeyCode::$x,
            $m,
        ))
    };
}

/// Create a shifted key
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!($x, $crate::modifier::ModifierCombination::LSHIFT)
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a modifier key, `m!(ModifierCombination::LCTRL)` for example
#[macro_export]
macro_rules! m {
    ($m: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::Modifier($m))
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerOn($x))
    };
}

/// Create a layer toggle action
#[macro_export]
macro_rules! tg {
    ($x: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::LayerToggle($x))
    };
}

/// Create a modifier-tap-hold action
#[macro_export]
macro_rules! mt {
    ($k: ident, $m: expr) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::$k),
            $crate::action::Action::Modifier($m),
        )
    };
}

/// Create a tap dance action, `n` is the index of the tap-hold binding
#[macro_export]
macro_rules! td {
    ($n: expr) => {
        $crate::action::KeyAction::TapDance($n)
    };
}

/// Create a tap-hold binding for a tap dance which taps a shifted key and holds a modifier,
/// `LSFT(KC_MINS)` tapped and `MOD_LCTL` held for example.
#[macro_export]
macro_rules! shifted_tap_hold {
    ($k: ident, $m: expr) => {
        $crate::tap_dance::TapHold::new(
            $crate::action::Action::KeyWithModifier(
                $crate::keycode::KeyCode::$k,
                $crate::modifier::ModifierCombination::LSHIFT,
            ),
            $crate::action::Action::Modifier($m),
        )
    };
}

/// Create a macro key, `n` is the index of the macro
#[macro_export]
macro_rules! mcr {
    ($n: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::TriggerMacro($n))
    };
}
