//! Integration tests for tensile-render.

use tensile_math::Vec3;
use tensile_mesh::generators::lattice_mesh;
use tensile_render::json_exporter::AnimationData;
use tensile_render::surface::{HeadlessSurface, MeshSurface, SurfaceFrame, SurfaceSink};
use tensile_render::JsonFrameExporter;

// ─── HeadlessSurface Tests ────────────────────────────────────

#[test]
fn headless_counts_frames() {
    let mesh = lattice_mesh(2, 2, 1.0);
    let mut sink = HeadlessSurface::new();
    assert_eq!(sink.name(), "headless");
    assert_eq!(sink.frame_count(), 0);

    let frame = SurfaceFrame::new(0, &mesh.pos_x, &mesh.pos_y, &mesh.pos_z);
    sink.commit_positions(&frame).unwrap();
    sink.commit_positions(&frame).unwrap();
    assert_eq!(sink.frame_count(), 2);
    sink.finalize().unwrap();
}

#[test]
fn frame_accessors() {
    let frame = SurfaceFrame::new(42, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]);
    assert_eq!(frame.timestep, 42);
    assert_eq!(frame.vertex_count(), 3);
    assert_eq!(frame.position(1), Vec3::new(2.0, 5.0, 8.0));
}

// ─── MeshSurface Tests ────────────────────────────────────────

#[test]
fn mesh_surface_updates_positions_and_normals() {
    let mesh = lattice_mesh(3, 3, 0.1);
    let mut sink = MeshSurface::new(mesh.clone());

    // Tilt the sheet: y = x.
    let pos_y: Vec<f32> = mesh.pos_x.clone();
    let frame = SurfaceFrame::new(1, &mesh.pos_x, &pos_y, &mesh.pos_z);
    sink.commit_positions(&frame).unwrap();

    assert_eq!(sink.frame_count(), 1);
    assert_eq!(sink.mesh().pos_y, pos_y);
    let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
    for i in 0..sink.mesh().vertex_count() {
        assert!((sink.mesh().normal(i) - expected).length() < 1e-4);
    }
}

#[test]
fn mesh_surface_rejects_wrong_length() {
    let mesh = lattice_mesh(3, 3, 0.1);
    let mut sink = MeshSurface::new(mesh);
    let frame = SurfaceFrame::new(0, &[0.0], &[0.0], &[0.0]);
    assert!(sink.commit_positions(&frame).is_err());
    assert_eq!(sink.frame_count(), 0);
}

// ─── JsonFrameExporter Tests ──────────────────────────────────

#[test]
fn json_exporter_collects_interleaved_frames() {
    let mut exporter = JsonFrameExporter::new("unused.json", vec![0, 1, 2]);
    let frame = SurfaceFrame::new(7, &[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]);
    exporter.commit_positions(&frame).unwrap();

    let anim = exporter.animation();
    assert_eq!(anim.vertex_count, 2);
    assert_eq!(anim.frames[0].timestep, 7);
    assert_eq!(anim.frames[0].positions, vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
}

#[test]
fn json_exporter_rejects_changing_vertex_count() {
    let mut exporter = JsonFrameExporter::new("unused.json", Vec::new());
    exporter
        .commit_positions(&SurfaceFrame::new(0, &[0.0, 1.0], &[0.0, 0.0], &[0.0, 0.0]))
        .unwrap();
    let shorter = SurfaceFrame::new(1, &[0.0], &[0.0], &[0.0]);
    assert!(exporter.commit_positions(&shorter).is_err());
    assert_eq!(exporter.frame_count(), 1);
}

#[test]
fn json_exporter_writes_file() {
    let path = std::env::temp_dir().join(format!("tensile_frames_{}.json", std::process::id()));
    let mut exporter = JsonFrameExporter::new(&path, vec![0, 1, 2]);
    for t in 0..3 {
        let x = [t as f32, 1.0, 0.0];
        exporter
            .commit_positions(&SurfaceFrame::new(t, &x, &[0.0; 3], &[0.0; 3]))
            .unwrap();
    }
    exporter.finalize().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let anim: AnimationData = serde_json::from_str(&content).unwrap();
    assert_eq!(anim.frames.len(), 3);
    assert_eq!(anim.indices, vec![0, 1, 2]);
    assert_eq!(anim.frames[2].positions[0], 2.0);
    let _ = std::fs::remove_file(&path);
}
