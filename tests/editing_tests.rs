//! End-to-End-Tests der Editier-Sitzung: Klick-Flow, Heading-Policy,
//! Freihand-Geste, Undo.

use approx::assert_relative_eq;
use field_path_editor::{
    EditorOptions, EditorSession, FieldTransform, HeadingMode, Pose, ToolAction,
};
use glam::DVec2;

/// Feldmitte bei (288, 288), 4 px/Zoll.
fn tf() -> FieldTransform {
    FieldTransform::new(DVec2::new(288.0, 288.0), 4.0)
}

fn session() -> EditorSession {
    EditorSession::new(Pose::default(), EditorOptions::default())
}

fn click_world(session: &mut EditorSession, tf: &FieldTransform, world: DVec2) -> ToolAction {
    session.pointer_click(tf.world_to_canvas(world), tf)
}

#[test]
fn linien_szenario_aus_der_dokumentation() {
    // Start (0,0,0°), Linie nach (24,0) im Tangent-Modus → {24, 0, 0}
    let mut session = session();
    let tf = tf();
    session.select_tool(0);

    click_world(&mut session, &tf, DVec2::new(24.0, 0.0));
    let wp = &session.path.points[0];
    assert_relative_eq!(wp.pos.x, 24.0);
    assert_relative_eq!(wp.pos.y, 0.0);
    assert_relative_eq!(wp.heading, 0.0);

    // Zweite Linie nach (24,24): Fahrtrichtung +y → Heading 90
    click_world(&mut session, &tf, DVec2::new(24.0, 24.0));
    let wp = &session.path.points[1];
    assert_relative_eq!(wp.heading, 90.0);
}

#[test]
fn straight_modus_friert_ziel_heading_ein() {
    let mut session = session();
    let tf = tf();
    session.select_tool(0);
    session.heading_mode = HeadingMode::Straight;
    session.end_heading = 45.0;

    click_world(&mut session, &tf, DVec2::new(24.0, 0.0));
    assert_relative_eq!(session.path.points[0].heading, 45.0);

    // Policy-Wechsel ändert bestehende Wegpunkte nicht
    session.heading_mode = HeadingMode::Tangent;
    click_world(&mut session, &tf, DVec2::new(48.0, 0.0));
    assert_relative_eq!(session.path.points[0].heading, 45.0);
    assert_relative_eq!(session.path.points[1].heading, 0.0);
}

#[test]
fn orth_modi_stehen_quer_zur_fahrtrichtung() {
    let mut session = session();
    let tf = tf();
    session.select_tool(0);

    session.heading_mode = HeadingMode::OrthLeft;
    click_world(&mut session, &tf, DVec2::new(24.0, 0.0));
    assert_relative_eq!(session.path.points[0].heading, 90.0);

    session.heading_mode = HeadingMode::OrthRight;
    click_world(&mut session, &tf, DVec2::new(48.0, 0.0));
    assert_relative_eq!(session.path.points[1].heading, -90.0);
}

#[test]
fn bezier_tool_haengt_genau_einen_wegpunkt_an() {
    let mut session = session();
    let tf = tf();
    session.select_tool(1); // Bézier

    assert_eq!(
        click_world(&mut session, &tf, DVec2::new(12.0, 12.0)),
        ToolAction::Continue
    );
    assert!(session.path.points.is_empty());

    assert_eq!(
        click_world(&mut session, &tf, DVec2::new(24.0, 0.0)),
        ToolAction::ReadyToExecute
    );
    assert_eq!(session.path.points.len(), 1);
    assert_relative_eq!(session.path.points[0].pos.x, 24.0, epsilon = 1e-9);
}

#[test]
fn freihand_geste_landet_als_mehrpunkt_segment() {
    let mut session = session();
    let tf = tf();
    session.select_tool(3); // Freihand

    // Viertelkreis Radius 24 um die Feldmitte zeichnen
    let stroke: Vec<DVec2> = (0..=30)
        .map(|i| {
            let ang = std::f64::consts::FRAC_PI_2 * i as f64 / 30.0;
            DVec2::new(24.0 * ang.cos(), 24.0 * ang.sin())
        })
        .collect();

    // Snapping stören lassen wäre unfair: Raster aus
    session.options.snap_step_in = 0.0;
    session.path.start = Pose::new(DVec2::new(24.0, 0.0), 90.0);

    assert!(session.pointer_drag_start(tf.world_to_canvas(stroke[0]), &tf));
    for &p in &stroke[1..] {
        session.pointer_drag_move(tf.world_to_canvas(p), &tf);
    }
    assert_eq!(session.pointer_drag_end(), ToolAction::ReadyToExecute);

    assert!(session.path.points.len() > 1);
    let last = session.path.points.last().unwrap();
    assert_relative_eq!(last.pos.x, 0.0, epsilon = 0.5);
    assert_relative_eq!(last.pos.y, 24.0, epsilon = 0.5);
}

#[test]
fn undo_und_clear_raeumen_in_schritten_auf() {
    let mut session = session();
    let tf = tf();
    session.select_tool(0);
    click_world(&mut session, &tf, DVec2::new(24.0, 0.0));
    click_world(&mut session, &tf, DVec2::new(48.0, 0.0));
    click_world(&mut session, &tf, DVec2::new(48.0, 24.0));
    assert_eq!(session.path.points.len(), 3);

    assert_eq!(session.undo(), 1);
    assert_eq!(session.path.points.len(), 2);

    session.clear();
    assert!(session.path.points.is_empty());
    assert_eq!(session.undo(), 0);
}

#[test]
fn klicks_ausserhalb_des_felds_werden_eingefangen() {
    let mut session = session();
    let tf = tf();
    session.select_tool(0);

    // Weit außerhalb der Feldgrenzen klicken
    click_world(&mut session, &tf, DVec2::new(500.0, -500.0));
    let wp = &session.path.points[0];
    assert_relative_eq!(wp.pos.x, 72.0);
    assert_relative_eq!(wp.pos.y, -72.0);
}
