use crate::{ClassifierTable, DisplayTexts, ErrorCode, StatusCode};

/// Raw status messages emitted by the backend job queue, shared by all job kinds.
pub const BACKEND_STATUS_MESSAGES: &[(&str, StatusCode)] = &[
    ("The task is waiting to be processed", StatusCode::Waiting),
    ("Job is still processing", StatusCode::Active),
    ("Job completed successfully", StatusCode::Completed),
    ("Job failed", StatusCode::Failed),
    ("The task is delayed and will be processed later", StatusCode::Delayed),
    ("The task is paused", StatusCode::Paused),
    ("The task is stuck and cannot proceed", StatusCode::Stuck),
];

pub static ARTICLE_EXTRACTION: ClassifierTable = ClassifierTable {
    statuses: BACKEND_STATUS_MESSAGES,
    status_texts: &[
        (StatusCode::Waiting, "La extracción de artículos está en espera."),
        (StatusCode::Active, "Extrayendo artículos del documento..."),
        (
            StatusCode::Completed,
            "La extracción de artículos se completó correctamente.",
        ),
        (StatusCode::Failed, "La extracción de artículos falló."),
        (
            StatusCode::Delayed,
            "La extracción de artículos está retrasada y se procesará más tarde.",
        ),
        (StatusCode::Paused, "La extracción de artículos está en pausa."),
        (
            StatusCode::Stuck,
            "La extracción de artículos está detenida y no puede continuar.",
        ),
        (
            StatusCode::Unknown,
            "Estado desconocido de la extracción de artículos.",
        ),
    ],
    errors: &[
        ("Network Error", ErrorCode::NetworkError),
        ("Job not found", ErrorCode::JobNotFound),
        ("Job failed", ErrorCode::JobFailed),
        ("Legal Basis not found", ErrorCode::LegalBasisNotFound),
        ("Document not found", ErrorCode::DocumentNotFound),
        ("Job cannot be canceled", ErrorCode::JobNotCancelable),
    ],
    error_texts: &[
        (
            ErrorCode::NetworkError,
            "Error de conexión",
            "No se pudo conectar con el servidor. Verifique su conexión a internet e intente nuevamente.",
        ),
        (
            ErrorCode::InvalidRequest,
            "Solicitud inválida",
            "La solicitud de extracción de artículos no es válida.",
        ),
        (
            ErrorCode::Unauthorized,
            "Acceso no autorizado",
            "No tiene permisos para consultar la extracción de artículos. Inicie sesión nuevamente.",
        ),
        (
            ErrorCode::JobNotFound,
            "Extracción de artículos cancelada anteriormente",
            "El proceso de extracción de artículos fue cancelado o ya no existe.",
        ),
        (
            ErrorCode::JobFailed,
            "Error en la extracción de artículos",
            "El proceso de extracción de artículos falló. Intente nuevamente más tarde.",
        ),
        (
            ErrorCode::ServerError,
            "Error del servidor",
            "Ocurrió un error interno en el servidor durante la extracción de artículos.",
        ),
        (
            ErrorCode::Unexpected,
            "Error inesperado",
            "Ocurrió un error inesperado durante la extracción de artículos.",
        ),
        (
            ErrorCode::LegalBasisNotFound,
            "Fundamento legal no encontrado",
            "El fundamento legal asociado a la extracción no existe.",
        ),
        (
            ErrorCode::DocumentNotFound,
            "Documento no encontrado",
            "El fundamento legal no tiene un documento del cual extraer artículos.",
        ),
        (
            ErrorCode::JobNotCancelable,
            "No se puede cancelar",
            "La extracción de artículos ya finalizó o no puede cancelarse en su estado actual.",
        ),
    ],
    display: DisplayTexts {
        processing: "Procesando la extracción de artículos...",
        cancelling: "Cancelando la extracción de artículos...",
        cancelled: "La extracción de artículos fue cancelada correctamente.",
        completed: "Los artículos se extrajeron correctamente.",
    },
};

pub static REQUIREMENT_IDENTIFICATION: ClassifierTable = ClassifierTable {
    statuses: BACKEND_STATUS_MESSAGES,
    status_texts: &[
        (
            StatusCode::Waiting,
            "La identificación de requerimientos está en espera.",
        ),
        (StatusCode::Active, "Identificando requerimientos..."),
        (
            StatusCode::Completed,
            "La identificación de requerimientos se completó correctamente.",
        ),
        (
            StatusCode::Failed,
            "La identificación de requerimientos falló.",
        ),
        (
            StatusCode::Delayed,
            "La identificación de requerimientos está retrasada y se procesará más tarde.",
        ),
        (
            StatusCode::Paused,
            "La identificación de requerimientos está en pausa.",
        ),
        (
            StatusCode::Stuck,
            "La identificación de requerimientos está detenida y no puede continuar.",
        ),
        (
            StatusCode::Unknown,
            "Estado desconocido de la identificación de requerimientos.",
        ),
    ],
    errors: &[
        ("Network Error", ErrorCode::NetworkError),
        ("Job not found", ErrorCode::JobNotFound),
        ("Job failed", ErrorCode::JobFailed),
        ("Legal Basis not found", ErrorCode::LegalBasisNotFound),
        ("Requirements not found", ErrorCode::RequirementsNotFound),
        ("Job cannot be canceled", ErrorCode::JobNotCancelable),
    ],
    error_texts: &[
        (
            ErrorCode::NetworkError,
            "Error de conexión",
            "No se pudo conectar con el servidor. Verifique su conexión a internet e intente nuevamente.",
        ),
        (
            ErrorCode::InvalidRequest,
            "Solicitud inválida",
            "La solicitud de identificación de requerimientos no es válida.",
        ),
        (
            ErrorCode::Unauthorized,
            "Acceso no autorizado",
            "No tiene permisos para consultar la identificación de requerimientos. Inicie sesión nuevamente.",
        ),
        (
            ErrorCode::JobNotFound,
            "Identificación de requerimientos cancelada anteriormente",
            "El proceso de identificación de requerimientos fue cancelado o ya no existe.",
        ),
        (
            ErrorCode::JobFailed,
            "Error en la identificación de requerimientos",
            "El proceso de identificación de requerimientos falló. Intente nuevamente más tarde.",
        ),
        (
            ErrorCode::ServerError,
            "Error del servidor",
            "Ocurrió un error interno en el servidor durante la identificación de requerimientos.",
        ),
        (
            ErrorCode::Unexpected,
            "Error inesperado",
            "Ocurrió un error inesperado durante la identificación de requerimientos.",
        ),
        (
            ErrorCode::LegalBasisNotFound,
            "Fundamento legal no encontrado",
            "El fundamento legal asociado a la identificación no existe.",
        ),
        (
            ErrorCode::RequirementsNotFound,
            "Requerimientos no encontrados",
            "No hay requerimientos asociados al fundamento legal para identificar.",
        ),
        (
            ErrorCode::JobNotCancelable,
            "No se puede cancelar",
            "La identificación de requerimientos ya finalizó o no puede cancelarse en su estado actual.",
        ),
    ],
    display: DisplayTexts {
        processing: "Procesando la identificación de requerimientos...",
        cancelling: "Cancelando la identificación de requerimientos...",
        cancelled: "La identificación de requerimientos fue cancelada correctamente.",
        completed: "Los requerimientos se identificaron correctamente.",
    },
};
