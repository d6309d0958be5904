//! Inventory commands.
//!
//! Every command goes through the same requests the pages emit, so the
//! printed state is exactly what a page would render.

use anyhow::Result;
use tienda_inventario::request::*;
use tienda_inventario::state::*;

use super::{print_json, Page};

/// `tienda lookup <codigo>`.
pub async fn lookup(
    page: &Page,
    codigo: &str,
    ubicacion: Option<String>,
    output_json: bool,
) -> Result<()> {
    let flux = &page.flux;
    flux.emit(LoadCatalogReq::PATH, LoadCatalogReq).await;
    flux.emit(OpenProductFormReq::PATH, OpenProductFormReq { ubicacion })
        .await;
    flux.emit(
        LookupReq::PATH,
        LookupReq {
            codigo: codigo.to_string(),
            trigger: LookupTrigger::Enter,
        },
    )
    .await;

    let form: ProductForm = page.state(ProductForm::PATH)?;
    if output_json {
        print_json(&form)?;
    } else {
        print_form(&form);
    }
    page.print_notices();
    Ok(())
}

/// `tienda presence --producto --ubicacion`.
pub async fn presence(
    page: &Page,
    producto: &str,
    ubicacion: &str,
    output_json: bool,
) -> Result<()> {
    let flux = &page.flux;
    flux.emit(OpenProductFormReq::PATH, OpenProductFormReq { ubicacion: None })
        .await;
    // As if a lookup had already found the product.
    flux.store().update(ProductForm::PATH, |f: &mut ProductForm| {
        f.producto_id = Some(producto.to_string());
    });
    flux.emit(
        SelectLocationReq::PATH,
        SelectLocationReq {
            ubicacion: Some(ubicacion.to_string()),
        },
    )
    .await;

    let form: ProductForm = page.state(ProductForm::PATH)?;
    if output_json {
        print_json(&serde_json::json!({
            "mode": form.mode,
            "action": form.action,
            "submitLabel": form.submit_label,
        }))?;
    } else {
        let stocked = matches!(form.mode, SubmitMode::AddToExisting { .. });
        println!("{:10} {}", "STOCKED", if stocked { "yes" } else { "no" });
        println!("{:10} {}", "ACTION", form.action);
        println!("{:10} {}", "SUBMIT", form.submit_label);
    }
    page.print_notices();
    Ok(())
}

/// `tienda categorias`.
pub async fn categorias(page: &Page, output_json: bool) -> Result<()> {
    page.flux.emit(LoadCatalogReq::PATH, LoadCatalogReq).await;

    let catalog: SubcategoryCatalog = page.state(SubcategoryCatalog::PATH)?;
    if !catalog.loaded {
        anyhow::bail!("Category tree could not be loaded.");
    }
    if output_json {
        return print_json(&catalog);
    }
    println!("{:8} {:30} {:8}", "ID", "SUBCATEGORIA", "PADRE");
    for entry in &catalog.entries {
        println!("{:8} {:30} {:8}", entry.id, entry.nombre, entry.padre);
    }
    Ok(())
}

/// Arguments of `tienda transfer`.
#[derive(Debug)]
pub struct TransferArgs {
    pub producto: String,
    pub origen: String,
    pub destino: String,
    pub cantidad: String,
    pub extra: Vec<(String, String)>,
}

/// `tienda transfer`: drag the product card from `origen` onto `destino`
/// and confirm.
pub async fn transfer(page: &Page, args: TransferArgs, output_json: bool) -> Result<()> {
    let flux = &page.flux;
    flux.emit(
        LoadBoardReq::PATH,
        LoadBoardReq {
            zones: vec![
                Dropzone::new(args.origen.clone(), "origen").with_card(TransferCard::new(
                    args.producto.clone(),
                    args.origen.clone(),
                    args.producto.clone(),
                )),
                Dropzone::new(args.destino.clone(), "destino"),
            ],
        },
    )
    .await;
    flux.emit(
        DragStartReq::PATH,
        DragStartReq {
            producto_id: args.producto.clone(),
            origen_id: args.origen.clone(),
        },
    )
    .await;
    flux.emit(
        DragOverReq::PATH,
        DragOverReq {
            destino_id: args.destino.clone(),
        },
    )
    .await;
    flux.emit(
        DropReq::PATH,
        DropReq {
            producto_id: Some(args.producto.clone()),
            origen_id: Some(args.origen.clone()),
            destino_id: Some(args.destino.clone()),
        },
    )
    .await;
    flux.emit(DragEndReq::PATH, DragEndReq).await;

    let board: TransferBoard = page.state(TransferBoard::PATH)?;
    if board.modal.is_none() {
        anyhow::bail!(
            "Not a valid transfer: origin and destination must be distinct locations."
        );
    }

    flux.emit(
        ConfirmTransferReq::PATH,
        ConfirmTransferReq {
            cantidad: args.cantidad,
            extra: args.extra,
        },
    )
    .await;

    let status: TransferStatus = page.state(TransferStatus::PATH)?;
    let board: TransferBoard = page.state(TransferBoard::PATH)?;
    if output_json {
        print_json(&serde_json::json!({ "status": status, "board": board }))?;
    } else {
        match &status.last {
            Some(TransferOutcome::Committed { .. }) => {
                println!("{:10} {:30}", "ZONE", "CARDS");
                for zone in &board.zones {
                    let cards: Vec<&str> = zone.cards.iter().map(|c| c.label.as_str()).collect();
                    println!("{:10} {:30}", zone.ubicacion_id, cards.join(", "));
                }
            }
            Some(TransferOutcome::Rejected { errors, .. }) => {
                for e in errors {
                    println!("  - {}", e);
                }
            }
            Some(TransferOutcome::Failed { message, .. }) => println!("{}", message),
            None => {}
        }
    }
    page.print_notices();
    Ok(())
}

/// `tienda etiqueta --producto`.
pub async fn etiqueta(
    page: &Page,
    producto: &str,
    ubicacion: &str,
    out: Option<String>,
    output_json: bool,
) -> Result<()> {
    page.flux
        .emit(
            ToggleLabelReq::PATH,
            ToggleLabelReq {
                producto_id: producto.to_string(),
                ubicacion_id: ubicacion.to_string(),
            },
        )
        .await;

    let preview: LabelPreview = page.state(LabelPreview::PATH)?;
    let view = preview
        .find(producto, ubicacion)
        .ok_or_else(|| anyhow::anyhow!("no label panel for product {}", producto))?;

    if output_json {
        return print_json(view);
    }
    match view.png_bytes() {
        Some(bytes) => {
            let path = out.unwrap_or_else(|| view.download_name());
            std::fs::write(&path, bytes?)?;
            println!("Label written to {}", path);
        }
        None => println!("{}", view.alt),
    }
    Ok(())
}

fn print_form(form: &ProductForm) {
    println!("{:16} {}", "CODIGO", form.codigo);
    for name in FieldName::ALL {
        let field = form.field(name);
        let lock = if field.locked { " (locked)" } else { "" };
        println!("{:16} {}{}", format!("{:?}", name).to_uppercase(), field.value, lock);
    }
    if !form.subcategorias.is_empty() {
        let options: Vec<String> = form
            .subcategorias
            .iter()
            .map(|o| format!("{}={}", o.value, o.label))
            .collect();
        println!("{:16} {}", "OPCIONES", options.join(", "));
    }
    for attr in &form.atributos {
        println!("  {}: {}", attr.nombre, attr.valor);
    }
    if let Some(id) = &form.producto_id {
        println!("{:16} {}", "PRODUCTO_ID", id);
    }
    println!("{:16} {}", "ACTION", form.action);
    println!("{:16} {}", "SUBMIT", form.submit_label);
}
