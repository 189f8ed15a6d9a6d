/// Place a layer written in the "pretty" order of the ergodox ez into its 14x6 matrix.
///
/// The pretty order follows the printed key layout: both halves side by side, row by row,
/// then the thumb clusters (top pair, single key, bottom triple). In the matrix each half
/// takes seven rows, one per physical column, and the thumb keys share the last column.
macro_rules! layout_ergodox_pretty {
    (
        $l00:expr, $l01:expr, $l02:expr, $l03:expr, $l04:expr, $l05:expr, $l06:expr,
        $r00:expr, $r01:expr, $r02:expr, $r03:expr, $r04:expr, $r05:expr, $r06:expr,
        $l10:expr, $l11:expr, $l12:expr, $l13:expr, $l14:expr, $l15:expr, $l16:expr,
        $r10:expr, $r11:expr, $r12:expr, $r13:expr, $r14:expr, $r15:expr, $r16:expr,
        $l20:expr, $l21:expr, $l22:expr, $l23:expr, $l24:expr, $l25:expr,
        $r21:expr, $r22:expr, $r23:expr, $r24:expr, $r25:expr, $r26:expr,
        $l30:expr, $l31:expr, $l32:expr, $l33:expr, $l34:expr, $l35:expr, $l36:expr,
        $r30:expr, $r31:expr, $r32:expr, $r33:expr, $r34:expr, $r35:expr, $r36:expr,
        $l40:expr, $l41:expr, $l42:expr, $l43:expr, $l44:expr,
        $r42:expr, $r43:expr, $r44:expr, $r45:expr, $r46:expr,
        $l55:expr, $l56:expr, $r50:expr, $r51:expr,
        $l54:expr, $r52:expr,
        $l53:expr, $l52:expr, $l51:expr, $r53:expr, $r54:expr, $r55:expr $(,)?
    ) => {
        [
            // Left half
            [$l00, $l10, $l20, $l30, $l40, qwasium::a!(No)],
            [$l01, $l11, $l21, $l31, $l41, $l51],
            [$l02, $l12, $l22, $l32, $l42, $l52],
            [$l03, $l13, $l23, $l33, $l43, $l53],
            [$l04, $l14, $l24, $l34, $l44, $l54],
            [$l05, $l15, $l25, $l35, qwasium::a!(No), $l55],
            [$l06, $l16, qwasium::a!(No), $l36, qwasium::a!(No), $l56],
            // Right half
            [$r00, $r10, qwasium::a!(No), $r30, qwasium::a!(No), $r50],
            [$r01, $r11, $r21, $r31, qwasium::a!(No), $r51],
            [$r02, $r12, $r22, $r32, $r42, $r52],
            [$r03, $r13, $r23, $r33, $r43, $r53],
            [$r04, $r14, $r24, $r34, $r44, $r54],
            [$r05, $r15, $r25, $r35, $r45, $r55],
            [$r06, $r16, $r26, $r36, $r46, qwasium::a!(No)],
        ]
    };
}

pub(crate) use layout_ergodox_pretty;

#[cfg(test)]
mod test {
    use qwasium::action::KeyAction;
    use qwasium::mo;

    #[rustfmt::skip]
    const NUMBERED: [[KeyAction; 6]; 14] = layout_ergodox_pretty!(
        mo!(0),  mo!(1),  mo!(2),  mo!(3),  mo!(4),  mo!(5),  mo!(6),     mo!(7),  mo!(8),  mo!(9),  mo!(10), mo!(11), mo!(12), mo!(13),
        mo!(14), mo!(15), mo!(16), mo!(17), mo!(18), mo!(19), mo!(20),    mo!(21), mo!(22), mo!(23), mo!(24), mo!(25), mo!(26), mo!(27),
        mo!(28), mo!(29), mo!(30), mo!(31), mo!(32), mo!(33),                      mo!(34), mo!(35), mo!(36), mo!(37), mo!(38), mo!(39),
        mo!(40), mo!(41), mo!(42), mo!(43), mo!(44), mo!(45), mo!(46),    mo!(47), mo!(48), mo!(49), mo!(50), mo!(51), mo!(52), mo!(53),
        mo!(54), mo!(55), mo!(56), mo!(57), mo!(58),                                        mo!(59), mo!(60), mo!(61), mo!(62), mo!(63),
                                                     mo!(64), mo!(65),    mo!(66), mo!(67),
                                                              mo!(68),    mo!(69),
                                            mo!(70), mo!(71), mo!(72),    mo!(73), mo!(74), mo!(75)
    );

    #[test]
    fn test_every_key_has_its_own_position() {
        let mut seen = [false; 76];
        for action in NUMBERED.iter().flatten() {
            if let KeyAction::Single(qwasium::action::Action::LayerOn(n)) = action {
                assert!(!seen[*n as usize]);
                seen[*n as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_pretty_order_to_matrix() {
        // Outer columns of both halves
        assert_eq!(NUMBERED[0][0], mo!(0));
        assert_eq!(NUMBERED[0][4], mo!(54));
        assert_eq!(NUMBERED[13][0], mo!(13));
        assert_eq!(NUMBERED[13][3], mo!(53));
        // Inner columns
        assert_eq!(NUMBERED[6][3], mo!(46));
        assert_eq!(NUMBERED[7][3], mo!(47));
        // Home row of the right half starts on its second column
        assert_eq!(NUMBERED[8][2], mo!(34));
        // Thumb clusters
        assert_eq!(NUMBERED[5][5], mo!(64));
        assert_eq!(NUMBERED[4][5], mo!(68));
        assert_eq!(NUMBERED[3][5], mo!(70));
        assert_eq!(NUMBERED[1][5], mo!(72));
        assert_eq!(NUMBERED[7][5], mo!(66));
        assert_eq!(NUMBERED[10][5], mo!(73));
        assert_eq!(NUMBERED[12][5], mo!(75));
        // No switch
        assert_eq!(NUMBERED[0][5], qwasium::a!(No));
        assert_eq!(NUMBERED[6][2], qwasium::a!(No));
        assert_eq!(NUMBERED[13][5], qwasium::a!(No));
    }
}
