use crate::action::KeyAction;
use crate::event::KeyEvent;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition.
/// Key strokes use tuple `(row, col, layer)` to retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Active layers, bit `n` is layer `n`
    layer_state: u32,
    /// Default layer number, max: 32
    default_layer: u8,
    /// Layer each held key was resolved on
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        const {
            assert!(NUM_LAYER > 0 && NUM_LAYER <= 32, "Keymap supports 1 to 32 layers");
        }
        Self {
            layers,
            layer_state: 0,
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    /// Bitmask of the active layers, the default layer isn't included
    pub fn layer_state(&self) -> u32 {
        self.layer_state
    }

    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        (layer_num as usize) < NUM_LAYER && self.layer_state & (1 << layer_num) != 0
    }

    /// The action at the position of the given layer, ignoring layer state
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers
            .get(layer_num)
            .and_then(|layer| layer.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    /// Resolve the action of a key event.
    ///
    /// A press is looked up from the highest active layer down, skipping transparent keys.
    /// The release of that key uses the same layer, whatever happened to the layers meanwhile.
    pub(crate) fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.pos.row as usize;
        let col = key_event.pos.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key ({}, {}) is out of the {}x{} matrix", row, col, ROW, COL);
            return KeyAction::No;
        }
        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.is_layer_active(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                self.layer_cache[row][col] = layer_idx as u8;
                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        KeyAction::No
    }

    /// The highest active layer
    pub fn get_activated_layer(&self) -> u8 {
        for layer_idx in (0..NUM_LAYER).rev() {
            if self.is_layer_active(layer_idx as u8) || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;
        layer
    }

    fn is_valid_layer(layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Activate given layer
    pub(crate) fn activate_layer(&mut self, layer_num: u8) {
        if Self::is_valid_layer(layer_num) {
            self.layer_state |= 1 << layer_num;
        }
    }

    /// Deactivate given layer
    pub(crate) fn deactivate_layer(&mut self, layer_num: u8) {
        if Self::is_valid_layer(layer_num) {
            self.layer_state &= !(1 << layer_num);
        }
    }

    /// Toggle given layer
    pub(crate) fn toggle_layer(&mut self, layer_num: u8) {
        if Self::is_valid_layer(layer_num) {
            self.layer_state ^= 1 << layer_num;
        }
    }
}

/// Returns `true` if every tap dance in the layers refers to one of the `num_tap_dances`
/// configured bindings.
///
/// Meant for a compile time check next to a keymap:
/// `const _: () = assert!(check_tap_dances(&KEYMAP, TAP_DANCES.len()));`
pub const fn check_tap_dances<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    layers: &[[[KeyAction; COL]; ROW]; NUM_LAYER],
    num_tap_dances: usize,
) -> bool {
    let mut layer = 0;
    while layer < NUM_LAYER {
        let mut row = 0;
        while row < ROW {
            let mut col = 0;
            while col < COL {
                if let KeyAction::TapDance(idx) = layers[layer][row][col] {
                    if idx as usize >= num_tap_dances {
                        return false;
                    }
                }
                col += 1;
            }
            row += 1;
        }
        layer += 1;
    }
    true
}
