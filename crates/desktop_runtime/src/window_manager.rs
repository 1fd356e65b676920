//! Window-manager transition helpers used by the desktop reducer and pointer handlers.
//!
//! Geometry policy:
//! - new windows cascade from (100, 100) in 30 px steps per already-open window, without
//!   wrapping, so long sessions place windows off screen;
//! - maximize fills the viewport minus the taskbar reserve;
//! - restore always returns to (100, 100) at 800x600 and does not remember prior geometry.

use crate::model::{
    OsState, Point, PointerPosition, ResizeSession, Size, Viewport, WindowId, WindowRecord,
    DragSession,
};

/// Origin of the first cascaded window.
pub const CASCADE_ORIGIN: i32 = 100;
/// Offset added per already-open window.
pub const CASCADE_STEP: i32 = 30;
/// Height kept free for the taskbar/dock when maximizing.
pub const TASKBAR_RESERVE_PX: i32 = 80;
/// Position applied when a maximized window is restored.
pub const RESTORED_POSITION: Point = Point::new(100, 100);
/// Smallest size the resize handle produces.
pub const MIN_RESIZE_SIZE: Size = Size::new(240, 160);
/// Part of the titlebar kept inside the viewport while dragging.
pub const DRAG_GRIP_PX: i32 = 48;

/// Cascaded position for the next window when `open_count` windows already exist.
pub fn cascade_position(open_count: usize) -> Point {
    let steps = i32::try_from(open_count).unwrap_or(i32::MAX);
    let offset = CASCADE_ORIGIN.saturating_add(CASCADE_STEP.saturating_mul(steps));
    Point::new(offset, offset)
}

/// z-index strictly above every window currently open.
pub fn next_z_index(state: &OsState) -> u32 {
    state.max_z_index().saturating_add(1)
}

/// Geometry of a window maximized into `viewport`.
pub fn maximized_geometry(viewport: Viewport) -> (Point, Size) {
    (
        Point::new(0, 0),
        Size::new(
            viewport.width.max(0),
            (viewport.height - TASKBAR_RESERVE_PX).max(0),
        ),
    )
}

/// Geometry of a window restored from maximized.
pub fn restored_geometry() -> (Point, Size) {
    (RESTORED_POSITION, Size::default())
}

pub(crate) fn find_window_mut<'a>(
    state: &'a mut OsState,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

/// Raises `window_id` above every other window and un-minimizes it.
///
/// Returns `false` when the window does not exist.
pub fn focus_window_internal(state: &mut OsState, window_id: &WindowId) -> bool {
    let z_index = next_z_index(state);
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    window.is_minimized = false;
    window.z_index = z_index;
    true
}

/// Flips the maximized flag and applies the matching fixed geometry.
pub fn toggle_maximize(window: &mut WindowRecord, viewport: Viewport) {
    let (position, size) = if window.is_maximized {
        restored_geometry()
    } else {
        maximized_geometry(viewport)
    };
    window.is_maximized = !window.is_maximized;
    window.position = position;
    window.size = size;
}

/// Target position for an in-progress drag.
///
/// Keeps the titlebar grip reachable: the top edge never goes above the viewport or into the
/// taskbar reserve, and at least [`DRAG_GRIP_PX`] stays visible horizontally.
pub fn drag_target(session: &DragSession, pointer: PointerPosition, viewport: Viewport) -> Point {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    let max_y = (viewport.height - TASKBAR_RESERVE_PX - DRAG_GRIP_PX).max(0);
    let max_x = (viewport.width - DRAG_GRIP_PX).max(0);
    Point::new(
        (session.position_start.x + dx).clamp(-DRAG_GRIP_PX, max_x),
        (session.position_start.y + dy).clamp(0, max_y),
    )
}

/// Target size for an in-progress bottom-right resize, never below [`MIN_RESIZE_SIZE`].
pub fn resize_target(session: &ResizeSession, pointer: PointerPosition) -> Size {
    Size::new(
        (session.size_start.width + pointer.x - session.pointer_start.x)
            .max(MIN_RESIZE_SIZE.width),
        (session.size_start.height + pointer.y - session.pointer_start.y)
            .max(MIN_RESIZE_SIZE.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_grows_without_wrapping() {
        assert_eq!(cascade_position(0), Point::new(100, 100));
        assert_eq!(cascade_position(3), Point::new(190, 190));
        assert_eq!(cascade_position(40), Point::new(1300, 1300));
        assert_eq!(cascade_position(usize::MAX), Point::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn maximized_geometry_reserves_taskbar() {
        let (position, size) = maximized_geometry(Viewport {
            width: 1440,
            height: 900,
        });
        assert_eq!(position, Point::new(0, 0));
        assert_eq!(size, Size::new(1440, 820));

        let (_, tiny) = maximized_geometry(Viewport {
            width: 300,
            height: 40,
        });
        assert_eq!(tiny, Size::new(300, 0));
    }

    #[test]
    fn drag_is_clamped_to_reachable_area() {
        let session = DragSession {
            window_id: WindowId::new("a"),
            pointer_start: PointerPosition { x: 10, y: 10 },
            position_start: Point::new(100, 100),
        };
        let viewport = Viewport {
            width: 1000,
            height: 700,
        };

        let moved = drag_target(&session, PointerPosition { x: 60, y: 40 }, viewport);
        assert_eq!(moved, Point::new(150, 130));

        let above = drag_target(&session, PointerPosition { x: 10, y: -500 }, viewport);
        assert_eq!(above.y, 0);

        let far = drag_target(&session, PointerPosition { x: 5000, y: 5000 }, viewport);
        assert_eq!(far, Point::new(952, 572));
    }

    #[test]
    fn resize_respects_minimum() {
        let session = ResizeSession {
            window_id: WindowId::new("a"),
            pointer_start: PointerPosition { x: 0, y: 0 },
            size_start: Size::new(800, 600),
        };
        assert_eq!(
            resize_target(&session, PointerPosition { x: 40, y: -20 }),
            Size::new(840, 580)
        );
        assert_eq!(
            resize_target(&session, PointerPosition { x: -2000, y: -2000 }),
            MIN_RESIZE_SIZE
        );
    }
}
