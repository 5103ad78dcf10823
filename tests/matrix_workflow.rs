// tests/matrix_workflow.rs
//! End-to-end workflow tests for the matrix document

use relmatrix::{MatrixDocument, MatrixError, ScalarKind, Value};

#[test]
fn test_collision_setup_workflow() {
    println!("=== Collision Setup Workflow Test ===");

    // Designer lists the collision layers
    let mut doc = MatrixDocument::with_elements(
        ScalarKind::Bool,
        ["terrain", "player", "enemy", "projectile"],
    );
    assert_eq!(doc.dimension(), 4);

    // Enable a few pairs; every write mirrors across the anti-diagonal
    doc.write(0, 1, Value::Bool(true)).unwrap();
    doc.write(1, 2, Value::Bool(true)).unwrap();
    doc.write(3, 0, Value::Bool(true)).unwrap();

    let n = doc.dimension();
    for a in 0..n {
        for b in 0..n {
            assert_eq!(
                doc.read(a, b).unwrap(),
                doc.read(n - 1 - b, n - 1 - a).unwrap(),
                "symmetry broken at ({a}, {b})"
            );
        }
    }
    println!("symmetry holds over {}x{} cells", n, n);

    // Save, reload, verify the flat form carried everything
    let bytes = doc.to_bytes().unwrap();
    println!("document encoded to {} bytes", bytes.len());

    let loaded = MatrixDocument::from_bytes(&bytes).unwrap();
    assert_eq!(loaded, doc);
    assert_eq!(loaded.element_name(3), Some("projectile"));
    assert_eq!(loaded.read(0, 1).unwrap(), Value::Bool(true));
}

#[test]
fn test_edit_resize_edit_save_cycle() {
    println!("=== Edit / Resize / Save Cycle Test ===");

    let mut doc = MatrixDocument::with_elements(ScalarKind::Int, ["a", "b"]);
    doc.write(0, 0, Value::Int(1)).unwrap();
    doc.write(0, 1, Value::Int(2)).unwrap();
    doc.write(1, 0, Value::Int(3)).unwrap();

    // Growing the registry grows the matrix, keeping entered values
    doc.add_element("c");
    assert_eq!(doc.dimension(), 3);
    assert_eq!(doc.read(0, 0).unwrap(), Value::Int(1));
    assert_eq!(doc.read(2, 2).unwrap(), Value::Int(0));

    // Edit in the new row, then shrink again
    doc.write(2, 0, Value::Int(9)).unwrap();
    doc.remove_element(2);
    assert_eq!(doc.dimension(), 2);

    // Reload and check the surviving block
    let loaded = MatrixDocument::from_bytes(&doc.to_bytes().unwrap()).unwrap();
    assert_eq!(loaded.read(0, 0).unwrap(), Value::Int(1));
    assert_eq!(loaded.read(0, 1).unwrap(), Value::Int(2));
    assert_eq!(loaded.read(1, 0).unwrap(), Value::Int(3));
    println!("shrunk document round-tripped cleanly");
}

#[test]
fn test_error_surfaces_reach_the_caller() {
    let mut doc = MatrixDocument::with_elements(ScalarKind::Float, ["x", "y"]);

    // wrong kind
    assert!(matches!(
        doc.write(0, 0, Value::Bool(true)),
        Err(MatrixError::KindMismatch { .. })
    ));

    // out of range, both axes
    assert!(matches!(
        doc.read(2, 0),
        Err(MatrixError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        doc.write(0, 2, Value::Float(1.0)),
        Err(MatrixError::IndexOutOfRange { .. })
    ));

    // nothing above mutated anything
    assert_eq!(doc.read(0, 0).unwrap(), Value::Float(0.0));
}
