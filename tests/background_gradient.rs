use expenses_mockup::mockup::palette::{BG_DARK, BG_LIGHT, BG_MEDIUM};
use expenses_mockup::mockup::{background, gradient_color_at};
use expenses_mockup::rendering::paint::PaintCommand;
use expenses_mockup::Viewport;

fn close(a: (u8, u8, u8, u8), b: (u8, u8, u8, u8)) -> bool {
    let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 1;
    d(a.0, b.0) && d(a.1, b.1) && d(a.2, b.2)
}

#[test]
fn stops_land_on_first_middle_and_last_scanline() {
    for height in [2u32, 10, 100, 1400, 1401] {
        assert_eq!(gradient_color_at(0, height), BG_DARK, "top of {}", height);
        if height % 2 == 0 {
            assert_eq!(gradient_color_at(height / 2, height), BG_MEDIUM, "middle of {}", height);
        } else {
            assert!(close(gradient_color_at(height / 2, height), BG_MEDIUM));
        }
        if height >= 10 {
            assert!(close(gradient_color_at(height - 1, height), BG_LIGHT), "bottom of {}", height);
        }
    }
}

#[test]
fn every_scanline_is_painted_exactly_once() {
    for height in [1u32, 7, 1400] {
        let viewport = Viewport { width: 800, height };
        let list = background(viewport);
        assert_eq!(list.len(), height as usize);
        for (y, cmd) in list.commands().iter().enumerate() {
            match cmd {
                PaintCommand::FillRect { rect, rgba } => {
                    assert_eq!((rect.x, rect.y, rect.width, rect.height), (0, y as i32, 800, 1));
                    assert_eq!(rgba.3, 255);
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
    }
}

#[test]
fn gradient_rises_then_falls() {
    let h = 1400;
    let r = |y| gradient_color_at(y, h).0;
    assert!(r(0) < r(350));
    assert!(r(350) < r(699));
    assert!(r(700) > r(1050));
    assert!(r(1050) > r(1399));
}
