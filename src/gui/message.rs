use crate::gui::screens::{
    ScreenMessage, catalog::CatalogScreen, detail::DetailPanel, upload::UploadPanel,
};

#[derive(Debug, Clone)]
pub enum Message {
    Catalog(ScreenMessage<CatalogScreen>),
    Detail(ScreenMessage<DetailPanel>),
    Upload(ScreenMessage<UploadPanel>),
}
